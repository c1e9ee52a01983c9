//! Record table

use crate::cell::{CellValue, SharedString, StringPool};
use crate::column::{Column, ColumnType};
use crate::error::{Error, Result};
use crate::infer::TypeInference;

/// Ordered rows of named, typed columns.
///
/// Cells keep the exact text they were loaded with. Column order, row order
/// and row count are fixed once the table is built.
#[derive(Debug, Clone)]
pub struct RecordTable {
    columns: Vec<Column>,
    rows: Vec<Vec<SharedString>>,
}

impl RecordTable {
    /// Returns the columns in header order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns a specific column
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Returns the index of the first column with the given header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns the inferred type of a column
    pub fn column_type(&self, index: usize) -> Option<ColumnType> {
        self.columns.get(index).map(|c| c.column_type)
    }

    /// Returns the header names in order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns the number of columns in the table.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of data rows in the table (header excluded).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the raw text of a cell
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(SharedString::as_str)
    }

    /// Get the typed value of a cell
    pub fn value(&self, row: usize, col: usize) -> Option<CellValue> {
        let column_type = self.column_type(col)?;
        self.get(row, col)
            .map(|raw| CellValue::interpret(raw, column_type))
    }

    /// Get the typed values of a whole column, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnOutOfBounds`] if `col` is not a column of the table.
    pub fn column_values(&self, col: usize) -> Result<Vec<CellValue>> {
        let column_type = self
            .column_type(col)
            .ok_or(Error::ColumnOutOfBounds(col, self.columns.len()))?;
        Ok(self
            .rows
            .iter()
            .map(|r| CellValue::interpret(r[col].as_str(), column_type))
            .collect())
    }

    /// Get a view of one row
    pub fn row(&self, index: usize) -> Option<RowView<'_>> {
        self.rows.get(index).map(|cells| RowView {
            index,
            columns: &self.columns,
            cells,
        })
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().enumerate().map(|(index, cells)| RowView {
            index,
            columns: &self.columns,
            cells,
        })
    }
}

/// Borrowed view of a single table row
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    index: usize,
    columns: &'a [Column],
    cells: &'a [SharedString],
}

impl<'a> RowView<'a> {
    /// Row index (0-based, header excluded)
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the raw text of a cell in this row
    pub fn get(&self, col: usize) -> Option<&'a str> {
        self.cells.get(col).map(SharedString::as_str)
    }

    /// Get the typed value of a cell in this row
    pub fn value(&self, col: usize) -> Option<CellValue> {
        let column = self.columns.get(col)?;
        self.get(col)
            .map(|raw| CellValue::interpret(raw, column.column_type))
    }

    /// Iterate over `(column, raw text)` pairs in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&'a Column, &'a str)> {
        self.columns
            .iter()
            .zip(self.cells.iter().map(SharedString::as_str))
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Builds a [`RecordTable`] one record at a time.
///
/// Column types are inferred over every pushed record and fixed when
/// [`finish`](RecordTableBuilder::finish) is called.
#[derive(Debug)]
pub struct RecordTableBuilder {
    headers: Vec<String>,
    inference: Vec<TypeInference>,
    rows: Vec<Vec<SharedString>>,
    pool: StringPool,
}

impl RecordTableBuilder {
    /// Start a table with the given header names
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let inference = vec![TypeInference::new(); headers.len()];
        Self {
            headers,
            inference,
            rows: Vec::new(),
            pool: StringPool::new(),
        }
    }

    /// Number of records pushed so far
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Append one data record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldCountMismatch`] if the record does not have
    /// exactly one field per header; the record is not added.
    pub fn push_record<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<SharedString> = fields
            .into_iter()
            .map(|f| self.pool.intern(f))
            .collect();

        if cells.len() != self.headers.len() {
            return Err(Error::FieldCountMismatch {
                row: self.rows.len(),
                expected: self.headers.len(),
                actual: cells.len(),
            });
        }

        for (inference, cell) in self.inference.iter_mut().zip(&cells) {
            inference.observe(cell.as_str());
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Fix the column types and produce the table.
    pub fn finish(self) -> RecordTable {
        let columns: Vec<Column> = self
            .headers
            .into_iter()
            .zip(&self.inference)
            .enumerate()
            .map(|(index, (name, inference))| {
                let column_type = inference.column_type();
                tracing::debug!(
                    column = %name,
                    %column_type,
                    missing = inference.missing(),
                    "inferred column type"
                );
                Column::new(index, name, column_type)
            })
            .collect();

        RecordTable {
            columns,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reviews() -> RecordTable {
        let mut builder = RecordTableBuilder::new(["review_id", "score", "comment"]);
        builder.push_record(["r1", "5", "good product"]).unwrap();
        builder.push_record(["r2", "3", "ok"]).unwrap();
        builder.finish()
    }

    #[test]
    fn test_build_and_infer() {
        let table = reviews();

        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_columns(), 3);
        assert_eq!(
            table.headers().collect::<Vec<_>>(),
            vec!["review_id", "score", "comment"]
        );
        assert_eq!(table.column_type(0), Some(ColumnType::Text));
        assert_eq!(table.column_type(1), Some(ColumnType::Integer));
        assert_eq!(table.column_type(2), Some(ColumnType::Text));
    }

    #[test]
    fn test_cell_access() {
        let table = reviews();

        assert_eq!(table.get(0, 2), Some("good product"));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.value(1, 1), Some(CellValue::Integer(3)));
        assert_eq!(table.value(1, 0), Some(CellValue::text("r2")));
        assert_eq!(table.column_index("score"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_raw_text_is_preserved() {
        let mut builder = RecordTableBuilder::new(["code"]);
        builder.push_record(["007"]).unwrap();
        builder.push_record(["1.50"]).unwrap();
        let table = builder.finish();

        assert_eq!(table.column_type(0), Some(ColumnType::Float));
        assert_eq!(table.get(0, 0), Some("007"));
        assert_eq!(table.get(1, 0), Some("1.50"));
    }

    #[test]
    fn test_field_count_mismatch() {
        let mut builder = RecordTableBuilder::new(["a", "b"]);
        builder.push_record(["1", "2"]).unwrap();

        let err = builder.push_record(["1"]).unwrap_err();
        assert!(matches!(
            err,
            Error::FieldCountMismatch {
                row: 1,
                expected: 2,
                actual: 1
            }
        ));
        assert_eq!(builder.num_rows(), 1);
    }

    #[test]
    fn test_rows_iteration() {
        let table = reviews();
        let ids: Vec<_> = table.rows().map(|r| r.get(0).unwrap()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);

        let row = table.row(0).unwrap();
        assert_eq!(row.index(), 0);
        assert_eq!(row.len(), 3);
        let fields: Vec<_> = row.fields().map(|(c, v)| (c.name.as_str(), v)).collect();
        assert_eq!(
            fields,
            vec![("review_id", "r1"), ("score", "5"), ("comment", "good product")]
        );
    }

    #[test]
    fn test_column_values() {
        let table = reviews();
        assert_eq!(
            table.column_values(1).unwrap(),
            vec![CellValue::Integer(5), CellValue::Integer(3)]
        );
        assert!(matches!(
            table.column_values(7),
            Err(Error::ColumnOutOfBounds(7, 3))
        ));
    }

    #[test]
    fn test_header_only_table() {
        let table = RecordTableBuilder::new(["a", "b"]).finish();
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.column_type(0), Some(ColumnType::Text));
    }
}
