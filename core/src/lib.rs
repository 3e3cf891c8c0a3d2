//! tabledit Core Types
//!
//! This crate provides the foundational types shared by every tabledit crate:
//! - Row identity (RowId)
//! - Typed cell values (the CellValue enum) and their conversion errors
//! - Column descriptors and raw cells as produced by query execution
//! - Common error messages

mod column;
mod error;
pub mod messages;
mod value;

pub use column::*;
pub use error::*;
pub use value::*;

/// Index of a row within the original ordering of a session's result set.
pub type RowId = usize;
