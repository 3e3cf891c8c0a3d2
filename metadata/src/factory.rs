//! Metadata resolution.

use std::collections::HashMap;

use crate::{MetadataError, MetadataResult, ObjectType, QualifiedName, TableMetadata};

/// Resolves the metadata of the object an edit session targets.
///
/// Implementations typically query the database catalog over `Connection`.
pub trait MetadataFactory {
    type Connection: ?Sized;

    fn get(
        &self,
        connection: &Self::Connection,
        schema_name: &str,
        object_name: &str,
        object_type: ObjectType,
    ) -> MetadataResult<TableMetadata>;
}

/// A factory backed by a fixed catalog of known objects.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadataFactory {
    objects: HashMap<(String, String, ObjectType), TableMetadata>,
}

impl InMemoryMetadataFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object, replacing any previous entry with the same name and kind.
    pub fn register(&mut self, metadata: TableMetadata) {
        let name = metadata.escaped_multipart_name();
        let key = (
            name.schema.clone().unwrap_or_default(),
            name.name.clone(),
            metadata.object_type(),
        );
        self.objects.insert(key, metadata);
    }

    pub fn with(mut self, metadata: TableMetadata) -> Self {
        self.register(metadata);
        self
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl MetadataFactory for InMemoryMetadataFactory {
    type Connection = ();

    fn get(
        &self,
        _connection: &(),
        schema_name: &str,
        object_name: &str,
        object_type: ObjectType,
    ) -> MetadataResult<TableMetadata> {
        let key = (schema_name.to_string(), object_name.to_string(), object_type);
        self.objects.get(&key).cloned().ok_or_else(|| {
            MetadataError::object_not_found(
                &QualifiedName::new(schema_name, object_name),
                object_type,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnMetadata, TableMetadataBuilder};
    use tabledit_core::ColumnType;

    fn factory() -> InMemoryMetadataFactory {
        InMemoryMetadataFactory::new().with(
            TableMetadataBuilder::table("public", "t")
                .column(ColumnMetadata::new("id", ColumnType::Integer))
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_get_registered_table() {
        // GIVEN
        let factory = factory();

        // WHEN
        let metadata = factory.get(&(), "public", "t", ObjectType::Table).unwrap();

        // THEN
        assert_eq!(metadata.escaped_multipart_name(), &QualifiedName::new("public", "t"));
        assert_eq!(metadata.column_count(), 1);
    }

    #[test]
    fn test_get_unknown_object_fails() {
        // GIVEN
        let factory = factory();

        // WHEN
        let result = factory.get(&(), "public", "t", ObjectType::View);

        // THEN
        let err = result.unwrap_err();
        assert!(matches!(err, MetadataError::ObjectNotFound { .. }));
        assert_eq!(err.to_string(), "Object not found: view public.t");
    }
}
