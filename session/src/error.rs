//! Session error types.

use tabledit_core::{RowId, ValueError};
use tabledit_metadata::MetadataError;
use tabledit_query::QueryError;
use thiserror::Error;

/// Errors raised while staging a cell edit.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("row {row_id} is out of range: session has {row_count} rows")]
    RowOutOfRange { row_id: RowId, row_count: usize },

    #[error("column index {index} is out of range: table has {column_count} columns")]
    ColumnOutOfRange { index: usize, column_count: usize },

    #[error("column {column} cannot be updated")]
    ColumnNotUpdatable { column: String },

    #[error("invalid value for column {column}: {source}")]
    InvalidValue {
        column: String,
        #[source]
        source: ValueError,
    },
}

impl EditError {
    pub fn column_not_updatable(column: impl Into<String>) -> Self {
        Self::ColumnNotUpdatable {
            column: column.into(),
        }
    }

    pub fn invalid_value(column: impl Into<String>, source: ValueError) -> Self {
        Self::InvalidValue {
            column: column.into(),
            source,
        }
    }
}

/// Result type for edit operations.
pub type EditResult<T> = Result<T, EditError>;

/// Broad classification of a session error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The target object could not be resolved or described.
    Resolution,
    /// The initializing query failed or did not finish.
    Execution,
    /// A cell edit was rejected.
    Validation,
    /// The operation is not valid in the session's current state.
    State,
}

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Metadata resolution error.
    #[error("resolution error: {0}")]
    Resolution(#[from] MetadataError),

    /// The initializing query could not be built.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Query execution error.
    #[error("execution error: {message}")]
    Execution { message: String },

    /// Cell edit validation error.
    #[error("validation error: {0}")]
    Validation(#[from] EditError),

    /// Operation requires a ready session.
    #[error("edit session is not initialized")]
    NotInitialized,

    /// Initialization requested on a ready session.
    #[error("edit session is already initialized")]
    AlreadyInitialized,
}

impl SessionError {
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Resolution(_) | SessionError::Query(_) => ErrorKind::Resolution,
            SessionError::Execution { .. } => ErrorKind::Execution,
            SessionError::Validation(_) => ErrorKind::Validation,
            SessionError::NotInitialized | SessionError::AlreadyInitialized => ErrorKind::State,
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
