//! Column type inference
//!
//! Inference runs once over every value of a column and settles on a single
//! [`ColumnType`] for all of them. A single non-numeric value makes the whole
//! column text.

use crate::column::ColumnType;

/// Classification of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Zero-length field
    Missing,
    /// Parses as `i64`
    Integer,
    /// Parses as `f64` but not as `i64`
    Float,
    /// Anything else, whitespace-only fields included
    Text,
}

/// Classify a single field.
///
/// Surrounding whitespace is ignored when parsing a number, but a field
/// made only of whitespace is text.
pub fn classify(field: &str) -> CellKind {
    if field.is_empty() {
        return CellKind::Missing;
    }

    let trimmed = field.trim();
    if trimmed.is_empty() {
        return CellKind::Text;
    }

    if trimmed.parse::<i64>().is_ok() {
        return CellKind::Integer;
    }

    if trimmed.parse::<f64>().is_ok() {
        return CellKind::Float;
    }

    CellKind::Text
}

/// Accumulates the classifications of one column's values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeInference {
    rows: usize,
    missing: usize,
    floats: usize,
    texts: usize,
}

impl TypeInference {
    /// Create an accumulator that has seen no values
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one field of the column
    pub fn observe(&mut self, field: &str) {
        self.rows += 1;
        match classify(field) {
            CellKind::Missing => self.missing += 1,
            CellKind::Integer => {}
            CellKind::Float => self.floats += 1,
            CellKind::Text => self.texts += 1,
        }
    }

    /// Number of missing values observed so far
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// Settle on the column type for everything observed.
    pub fn column_type(&self) -> ColumnType {
        // Header-only column: nothing to suggest a number
        if self.rows == 0 || self.texts > 0 {
            return ColumnType::Text;
        }

        // Integers only stay integers when nothing is missing.
        if self.floats == 0 && self.missing == 0 {
            ColumnType::Integer
        } else {
            ColumnType::Float
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(values: &[&str]) -> ColumnType {
        let mut inference = TypeInference::new();
        for v in values {
            inference.observe(v);
        }
        inference.column_type()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), CellKind::Missing);
        assert_eq!(classify("   "), CellKind::Text);
        assert_eq!(classify("True"), CellKind::Text);
        assert_eq!(classify("-12"), CellKind::Integer);
        assert_eq!(classify("007"), CellKind::Integer);
        assert_eq!(classify(" 5 "), CellKind::Integer);
        assert_eq!(classify("1.5e3"), CellKind::Float);
        assert_eq!(classify("inf"), CellKind::Float);
        assert_eq!(classify("99999999999999999999"), CellKind::Float);
        assert_eq!(classify("good product"), CellKind::Text);
        assert_eq!(classify("1,5"), CellKind::Text);
    }

    #[test]
    fn test_integer_column() {
        assert_eq!(infer(&["5", "3", "1"]), ColumnType::Integer);
    }

    #[test]
    fn test_mixed_int_float_is_float() {
        assert_eq!(infer(&["5", "3.5"]), ColumnType::Float);
    }

    #[test]
    fn test_missing_promotes_integer_to_float() {
        assert_eq!(infer(&["5", "", "3"]), ColumnType::Float);
    }

    #[test]
    fn test_single_text_value_makes_column_text() {
        assert_eq!(infer(&["5", "3", "n/a"]), ColumnType::Text);
    }

    #[test]
    fn test_true_false_column_is_text() {
        assert_eq!(infer(&["true", "FALSE"]), ColumnType::Text);
        assert_eq!(infer(&["true", "1"]), ColumnType::Text);
    }

    #[test]
    fn test_whitespace_only_column_is_text() {
        assert_eq!(infer(&["  ", " "]), ColumnType::Text);
        assert_eq!(infer(&["5", " "]), ColumnType::Text);
    }

    #[test]
    fn test_all_missing_and_no_rows() {
        assert_eq!(infer(&["", ""]), ColumnType::Float);
        assert_eq!(infer(&[]), ColumnType::Text);
    }

    #[test]
    fn test_missing_count() {
        let mut inference = TypeInference::new();
        inference.observe("1");
        inference.observe("");
        inference.observe(" ");
        assert_eq!(inference.missing(), 1);
    }
}
