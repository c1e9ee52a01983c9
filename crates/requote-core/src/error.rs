//! Error types for requote-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in requote-core
#[derive(Debug, Error)]
pub enum Error {
    /// A data row does not have as many fields as the header
    #[error("Row {row} has {actual} fields, expected {expected}")]
    FieldCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (count: {1})")]
    ColumnOutOfBounds(usize, usize),
}
