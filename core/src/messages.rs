//! Common error messages used across tabledit components.
//!
//! These constants keep the wording identical wherever the session and its
//! collaborators report the same condition.

/// Error: the executor returned a query that has not finished executing.
pub const ERR_EXECUTION_NOT_COMPLETED: &str = "Execution not completed";

/// Error: the executor failed without supplying a message.
pub const ERR_EXECUTION_FAILED: &str = "Query execution failed";

/// Error: the executor dropped the completion handle without reporting.
pub const ERR_EXECUTION_ABANDONED: &str = "Query executor dropped the completion handle";

/// Error: the executed query produced no batch carrying a result set.
pub const ERR_NO_RESULT_SET: &str = "Query did not produce a result set";

/// Text used as the display value of a null cell.
pub const NULL_DISPLAY: &str = "NULL";
