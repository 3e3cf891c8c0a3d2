//! Query error types.

use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while building or describing queries.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Cannot select from {table}: no columns")]
    NoColumns { table: String },

    #[error("Row has {actual} cells, result set has {expected} columns")]
    RowWidthMismatch { expected: usize, actual: usize },
}

impl QueryError {
    pub fn no_columns(table: impl Into<String>) -> Self {
        Self::NoColumns {
            table: table.into(),
        }
    }
}
