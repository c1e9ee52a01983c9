//! # requote-core
//!
//! Core data structures for requote.
//!
//! This crate provides the in-memory table that sits between loading and
//! saving a CSV file:
//! - [`RecordTable`] - Ordered rows of named, typed columns
//! - [`ColumnType`] - The type inferred for a whole column
//! - [`CellValue`] - A typed view of a single cell
//! - [`TypeInference`] - Per-column type accumulator used while loading
//!
//! ## Example
//!
//! ```rust
//! use requote_core::{CellValue, ColumnType, RecordTableBuilder};
//!
//! let mut builder = RecordTableBuilder::new(["review_id", "score"]);
//! builder.push_record(["r1", "5"]).unwrap();
//! builder.push_record(["r2", "3"]).unwrap();
//! let table = builder.finish();
//!
//! assert_eq!(table.column_type(0), Some(ColumnType::Text));
//! assert_eq!(table.column_type(1), Some(ColumnType::Integer));
//! assert_eq!(table.value(1, 1), Some(CellValue::Integer(3)));
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod infer;
pub mod table;

pub use cell::{CellValue, SharedString, StringPool};
pub use column::{Column, ColumnType};
pub use error::{Error, Result};
pub use infer::{classify, CellKind, TypeInference};
pub use table::{RecordTable, RecordTableBuilder, RowView};
