//! TableMetadataBuilder for constructing TableMetadata.

use std::collections::HashSet;
use thiserror::Error;

use crate::{ColumnMetadata, ObjectType, QualifiedName, TableMetadata};

/// Errors raised while resolving or assembling table metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Object not found: {object_type} {name}")]
    ObjectNotFound {
        name: String,
        object_type: ObjectType,
    },

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Object {0} has no columns")]
    NoColumns(String),

    #[error("Column count mismatch: metadata has {expected} columns, result set has {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    /// Raised by factories backed by a live catalog when the lookup itself fails.
    #[error("Metadata lookup failed: {message}")]
    LookupFailed { message: String },
}

impl MetadataError {
    pub fn object_not_found(name: &QualifiedName, object_type: ObjectType) -> Self {
        Self::ObjectNotFound {
            name: name.to_string(),
            object_type,
        }
    }

    pub fn lookup_failed(message: impl Into<String>) -> Self {
        Self::LookupFailed {
            message: message.into(),
        }
    }
}

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Builder for TableMetadata.
#[derive(Debug)]
pub struct TableMetadataBuilder {
    name: QualifiedName,
    object_type: ObjectType,
    columns: Vec<ColumnMetadata>,
}

impl TableMetadataBuilder {
    /// Start building metadata for an object.
    pub fn new(name: QualifiedName, object_type: ObjectType) -> Self {
        Self {
            name,
            object_type,
            columns: Vec::new(),
        }
    }

    /// Start building metadata for a schema-qualified table.
    pub fn table(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(QualifiedName::new(schema, name), ObjectType::Table)
    }

    /// Start building metadata for a schema-qualified view.
    pub fn view(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(QualifiedName::new(schema, name), ObjectType::View)
    }

    /// Append a column; its ordinal is its position in the builder.
    pub fn column(mut self, mut column: ColumnMetadata) -> Self {
        column.ordinal = self.columns.len();
        self.columns.push(column);
        self
    }

    /// Build the metadata.
    pub fn build(self) -> MetadataResult<TableMetadata> {
        if self.columns.is_empty() {
            return Err(MetadataError::NoColumns(self.name.to_string()));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.escaped_name.as_str()) {
                return Err(MetadataError::DuplicateColumnName(
                    column.escaped_name.clone(),
                ));
            }
        }

        Ok(TableMetadata::new(self.name, self.object_type, self.columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabledit_core::ColumnType;

    #[test]
    fn test_build_assigns_ordinals() {
        // GIVEN
        let builder = TableMetadataBuilder::table("public", "t")
            .column(ColumnMetadata::new("id", ColumnType::Integer).key())
            .column(ColumnMetadata::new("name", ColumnType::Text));

        // WHEN
        let metadata = builder.build().unwrap();

        // THEN
        assert_eq!(metadata.column_count(), 2);
        assert_eq!(metadata.column(0).unwrap().ordinal, 0);
        assert_eq!(metadata.column(1).unwrap().ordinal, 1);
        assert_eq!(metadata.object_type(), ObjectType::Table);
    }

    #[test]
    fn test_build_rejects_duplicate_column() {
        let result = TableMetadataBuilder::table("public", "t")
            .column(ColumnMetadata::new("id", ColumnType::Integer))
            .column(ColumnMetadata::new("id", ColumnType::Text))
            .build();

        assert!(matches!(result, Err(MetadataError::DuplicateColumnName(name)) if name == "id"));
    }

    #[test]
    fn test_build_rejects_empty_object() {
        let result = TableMetadataBuilder::view("public", "v").build();

        assert!(matches!(result, Err(MetadataError::NoColumns(_))));
    }
}
