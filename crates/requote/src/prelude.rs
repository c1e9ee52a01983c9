//! Prelude module - common imports for requote users
//!
//! ```rust
//! use requote::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    load,
    requote_file,
    save,
    // Table types
    CellValue,
    Column,
    ColumnSummary,
    ColumnType,
    // I/O types
    CsvError,
    CsvReadOptions,
    CsvReader,
    CsvResult,
    CsvWriteOptions,
    CsvWriter,
    RecordTable,
    RequoteSummary,
};
