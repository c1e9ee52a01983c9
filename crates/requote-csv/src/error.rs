//! CSV error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// Source file does not exist
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Destination cannot be created or overwritten
    #[error("Cannot write to {}: {source}", path.display())]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input has no header row
    #[error("No columns to parse from input")]
    EmptyInput,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error (malformed quoting, bad UTF-8, ragged rows)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] requote_core::Error),
}

impl CsvError {
    /// Check if the error came from parsing the input rather than I/O on a path
    pub fn is_parse_error(&self) -> bool {
        match self {
            CsvError::EmptyInput | CsvError::Core(_) => true,
            CsvError::Csv(e) => !matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }
}
