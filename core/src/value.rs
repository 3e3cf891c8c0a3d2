//! Typed cell values.
//!
//! Cells arrive from query execution as display text. When a client edits a
//! cell, the new text is converted into a `CellValue` of the column's type so
//! that edits can be compared with the original by value rather than by text.

use std::fmt;

use crate::messages::NULL_DISPLAY;

/// A typed value held by one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// SQL null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 text.
    Text(String),
}

impl CellValue {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "{NULL_DISPLAY}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null() {
        assert!(CellValue::Null.is_null());
        assert!(!CellValue::Text(String::new()).is_null());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(CellValue::Null.to_string(), "NULL");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
        assert_eq!(CellValue::Int(-7).to_string(), "-7");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Text("abc".to_string()).to_string(), "abc");
    }
}
