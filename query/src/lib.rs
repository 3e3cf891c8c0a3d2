//! tabledit Query
//!
//! The query-side collaborators of an edit session.
//!
//! Responsibilities:
//! - Build the single SELECT that populates a session, with every
//!   identifier quoted
//! - Describe executed queries, their batches and result sets
//! - Carry the one-shot completion of an asynchronous execution back to
//!   the session

mod builder;
mod error;
mod execution;
mod result;

pub use builder::{quote_identifier, quote_qualified_name, SelectQueryBuilder};
pub use error::{QueryError, QueryResult};
pub use execution::{
    completion_channel, Batch, CompletionReceiver, CompletionSender, ExecutionState, Query,
    QueryExecutionStatus, QueryExecutor,
};
pub use result::{ResultSet, ResultSetSubset, Row};
