//! tabledit Session
//!
//! The edit session engine behind a table-editing feature.
//!
//! Responsibilities:
//! - Resolve the edited object's metadata and run the query that populates
//!   the session
//! - Track the session lifecycle (uninitialized, initializing, ready, failed)
//! - Stage cell edits per row without touching the underlying store
//! - Render row windows with pending edits overlaid on the original values

mod cache;
mod config;
mod edit;
mod error;
#[cfg(test)]
mod fixtures;
mod params;
mod query;
mod result;
mod session;
mod state;

pub use cache::EditCache;
pub use config::EditSessionConfig;
pub use edit::{CellUpdate, RowEdit, RowUpdate};
pub use error::{EditError, EditResult, ErrorKind, SessionError, SessionResult};
pub use params::{EditInitializerFilter, InitializeEditParams};
pub use query::construct_initialize_query;
pub use result::{EditCell, EditCellResponse, EditRow, EditRowState};
pub use session::EditSession;
pub use state::SessionState;
