//! # requote-csv
//!
//! CSV reader and writer for requote.
//!
//! [`CsvReader`] loads a file into a [`RecordTable`](requote_core::RecordTable),
//! inferring one type per column. [`CsvWriter`] saves it back, quoting every
//! field of a text-typed column and leaving integer and float columns bare.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
