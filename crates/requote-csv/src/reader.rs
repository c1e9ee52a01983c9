//! CSV reader

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use requote_core::{RecordTable, RecordTableBuilder};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a record table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<RecordTable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CsvError::NotFound {
                path: path.to_path_buf(),
            },
            _ => CsvError::Io(e),
        })?;

        let table = Self::read(file, options)?;
        tracing::info!(
            path = %path.display(),
            rows = table.num_rows(),
            columns = table.num_columns(),
            "loaded CSV"
        );
        Ok(table)
    }

    /// Read CSV from a reader into a record table.
    ///
    /// The first record is the header. Every following record must have
    /// the same number of fields.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<RecordTable> {
        let mut csv_reader = options.reader_builder().from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(CsvError::EmptyInput);
        }

        let mut builder = RecordTableBuilder::new(headers.iter());
        for result in csv_reader.records() {
            let record = result?;
            builder.push_record(record.iter())?;
        }

        Ok(builder.finish())
    }
}
