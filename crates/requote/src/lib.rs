//! # requote
//!
//! Load a CSV file into memory and write it back out with every text column
//! quoted.
//!
//! Each column gets a single type, inferred from all of its values when the
//! file is loaded. On output, every field of a text column (header included)
//! is enclosed in double quotes while integer and float columns are left
//! bare. Rows, column order and cell text are never changed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use requote::prelude::*;
//!
//! let summary = requote_file(
//!     "data/olist_order_reviews_dataset.csv",
//!     "olist_order_reviews_clean.csv",
//! )
//! .unwrap();
//! println!("{} rows", summary.rows);
//! ```

pub mod prelude;

pub use requote_core::{
    CellValue, Column, ColumnType, Error, RecordTable, RecordTableBuilder, Result, RowView,
};
pub use requote_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};

use std::path::Path;

/// Load a CSV file with a header row, inferring one type per column.
pub fn load<P: AsRef<Path>>(path: P) -> CsvResult<RecordTable> {
    CsvReader::read_file(path, &CsvReadOptions::default())
}

/// Save a table as CSV, quoting every field of its text columns.
pub fn save<P: AsRef<Path>>(table: &RecordTable, path: P) -> CsvResult<()> {
    CsvWriter::write_file(table, path, &CsvWriteOptions::default())
}

/// What a requote run did to one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Header name
    pub name: String,
    /// Inferred type
    pub column_type: ColumnType,
    /// Whether the column was written quoted
    pub quoted: bool,
    /// Number of missing cells
    pub missing: usize,
}

/// Outcome of [`requote_file`]
#[derive(Debug, Clone, PartialEq)]
pub struct RequoteSummary {
    /// Number of data rows written (header excluded)
    pub rows: usize,
    /// Per-column details, in header order
    pub columns: Vec<ColumnSummary>,
}

impl RequoteSummary {
    fn from_table(table: &RecordTable) -> CsvResult<Self> {
        let columns = table
            .columns()
            .iter()
            .map(|column| {
                let missing = table
                    .column_values(column.index)?
                    .iter()
                    .filter(|v| v.is_empty())
                    .count();
                Ok(ColumnSummary {
                    name: column.name.clone(),
                    column_type: column.column_type,
                    quoted: column.is_quoted(),
                    missing,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rows: table.num_rows(),
            columns,
        })
    }

    /// Number of columns written quoted
    pub fn quoted_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.quoted).count()
    }
}

/// Load `input` and save it to `output` with text columns quoted.
///
/// The output file is created or overwritten. Nothing is written if
/// loading fails.
pub fn requote_file<P, Q>(input: P, output: Q) -> CsvResult<RequoteSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let table = load(input)?;
    let summary = RequoteSummary::from_table(&table)?;
    save(&table, output)?;

    tracing::debug!(
        rows = summary.rows,
        quoted_columns = summary.quoted_columns(),
        "requote finished"
    );
    Ok(summary)
}
