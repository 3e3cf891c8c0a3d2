//! tabledit Metadata
//!
//! Describes the table or view being edited: its schema-qualified name and
//! the ordered column descriptors that cell updates are validated against.
//! Metadata is assembled through `TableMetadataBuilder`, resolved through a
//! `MetadataFactory`, and extended once with the authoritative columns of
//! the executed result set.

mod builder;
mod factory;
mod types;

pub use builder::{MetadataError, MetadataResult, TableMetadataBuilder};
pub use factory::{InMemoryMetadataFactory, MetadataFactory};
pub use types::*;
