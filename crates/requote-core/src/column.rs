//! Column types

use std::fmt;

/// The type inferred for a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Every value parses as a 64-bit integer and none is missing
    Integer,
    /// Every present value parses as a number
    Float,
    /// At least one value is not a number
    Text,
}

impl ColumnType {
    /// Get the display name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
        }
    }

    /// Check if the type is integer or floating-point
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Check if values of this type are written inside quotes
    pub fn is_quoted(&self) -> bool {
        !self.is_numeric()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column index (0-based)
    pub index: usize,
    /// Header name
    pub name: String,
    /// Inferred type
    pub column_type: ColumnType,
}

impl Column {
    /// Create a new column
    pub fn new<S: Into<String>>(index: usize, name: S, column_type: ColumnType) -> Self {
        Self {
            index,
            name: name.into(),
            column_type,
        }
    }

    /// Check if this column's values are written inside quotes
    pub fn is_quoted(&self) -> bool {
        self.column_type.is_quoted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_text_is_quoted() {
        assert!(ColumnType::Text.is_quoted());
        assert!(!ColumnType::Integer.is_quoted());
        assert!(!ColumnType::Float.is_quoted());
    }

    #[test]
    fn test_display() {
        assert_eq!(ColumnType::Float.to_string(), "float");
        assert!(Column::new(0, "flag", ColumnType::Text).is_quoted());
    }
}
