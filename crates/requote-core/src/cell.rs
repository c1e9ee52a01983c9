//! Cell values and interned cell text

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::column::ColumnType;

/// Typed view of a single cell.
///
/// Cells are stored as the raw text read from the file; a `CellValue` is
/// produced on demand by interpreting that text according to the type
/// inferred for its column.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value (zero-length field)
    Empty,

    /// Integer value
    Integer(i64),

    /// Floating-point value
    Float(f64),

    /// Text value
    Text(SharedString),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: AsRef<str>>(s: S) -> Self {
        CellValue::Text(SharedString::new(s))
    }

    /// Interpret raw field text as a value of the given column type.
    ///
    /// Text that does not fit the column type falls back to [`CellValue::Text`];
    /// this cannot happen for a type produced by inference over the same column.
    pub fn interpret(raw: &str, column_type: ColumnType) -> Self {
        if raw.is_empty() {
            return CellValue::Empty;
        }
        match column_type {
            ColumnType::Integer => raw
                .trim()
                .parse::<i64>()
                .map(CellValue::Integer)
                .unwrap_or_else(|_| CellValue::text(raw)),
            ColumnType::Float => raw
                .trim()
                .parse::<f64>()
                .map(CellValue::Float)
                .unwrap_or_else(|_| CellValue::text(raw)),
            ColumnType::Text => CellValue::text(raw),
        }
    }

    /// Check if the cell is missing
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Cell text shared by every cell holding the same string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Create a string that is not pooled
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        SharedString(Arc::from(s.as_ref()))
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Deduplicates field text while a table is loaded.
#[derive(Debug, Default)]
pub struct StringPool {
    strings: HashMap<Arc<str>, SharedString>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the pooled copy of `s`, adding it on first sight.
    pub fn intern<S: AsRef<str>>(&mut self, s: S) -> SharedString {
        let s = s.as_ref();
        match self.strings.get(s) {
            Some(shared) => shared.clone(),
            None => {
                let shared = SharedString::new(s);
                self.strings.insert(shared.0.clone(), shared.clone());
                shared
            }
        }
    }
}
