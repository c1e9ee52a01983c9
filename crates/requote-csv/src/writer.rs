//! CSV writer

use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvWriteOptions;
use requote_core::RecordTable;

/// CSV file writer
///
/// Fields of text-typed columns, header included, are always enclosed in
/// quotes. Fields of integer and float columns are written bare unless
/// they are missing or contain a delimiter, quote or line break.
pub struct CsvWriter;

impl CsvWriter {
    /// Write a record table to a CSV file, creating or truncating it
    pub fn write_file<P: AsRef<Path>>(
        table: &RecordTable,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| CsvError::NotWritable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::write(table, file, options)?;
        tracing::info!(
            path = %path.display(),
            rows = table.num_rows(),
            "wrote CSV"
        );
        Ok(())
    }

    /// Write a record table to a writer
    pub fn write<W: Write>(
        table: &RecordTable,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let mut csv_writer = options.writer_builder().from_writer(writer);

        if options.write_header {
            let header = table
                .columns()
                .iter()
                .map(|c| encode_field(&c.name, c.is_quoted(), options));
            csv_writer.write_record(header)?;
        }

        for row in table.rows() {
            let record = row
                .fields()
                .map(|(column, raw)| encode_field(raw, column.is_quoted(), options));
            csv_writer.write_record(record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Encode one field for output.
///
/// An empty field is always written as an empty quoted field so that a
/// missing value survives a reload and a one-column row never becomes a
/// blank line.
fn encode_field<'a>(raw: &'a str, quoted: bool, options: &CsvWriteOptions) -> Cow<'a, [u8]> {
    if quoted || raw.is_empty() || options.needs_quotes(raw) {
        let quote = options.quote;
        let mut out = Vec::with_capacity(raw.len() + 2);
        out.push(quote);
        for &b in raw.as_bytes() {
            if b == quote {
                out.push(quote);
            }
            out.push(b);
        }
        out.push(quote);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(raw.as_bytes())
    }
}
