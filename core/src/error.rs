//! Common error types for tabledit.

use thiserror::Error;

/// Errors that can occur when converting cell text into a typed value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// Text could not be parsed as the column's type.
    #[error("Cannot convert '{text}' to {type_name}")]
    InvalidLiteral { text: String, type_name: String },

    /// Null supplied for a column that does not allow it.
    #[error("Column {column} does not allow null values")]
    NullNotAllowed { column: String },
}

impl ValueError {
    pub fn invalid_literal(text: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            text: text.into(),
            type_name: type_name.into(),
        }
    }

    pub fn null_not_allowed(column: impl Into<String>) -> Self {
        Self::NullNotAllowed {
            column: column.into(),
        }
    }
}

/// Result type for value conversion.
pub type ValueResult<T> = Result<T, ValueError>;
