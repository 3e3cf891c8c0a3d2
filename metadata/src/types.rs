//! Table metadata types.

use serde::{Deserialize, Serialize};
use std::fmt;
use tabledit_core::{ColumnType, DbColumn};

use crate::{MetadataError, MetadataResult};

/// Kind of database object an edit session targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    #[serde(alias = "table", alias = "TABLE")]
    Table,
    #[serde(alias = "view", alias = "VIEW")]
    View,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Table => write!(f, "table"),
            ObjectType::View => write!(f, "view"),
        }
    }
}

/// Schema-qualified object name.
///
/// The parts are kept apart so each one can be quoted as a whole identifier;
/// a dot inside a part is part of the name, never a separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub schema: Option<String>,
    pub name: String,
}

impl QualifiedName {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }

    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    /// Name parts in order, schema first.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.schema.as_deref().into_iter().chain(Some(self.name.as_str()))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Column descriptor within a table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMetadata {
    /// Column name, unquoted.
    pub escaped_name: String,
    /// Position within the table's column list.
    pub ordinal: usize,
    /// Declared type, replaced by the result set's type on extend.
    pub data_type: ColumnType,
    /// Whether the column is part of the row key.
    pub is_key: bool,
    /// Whether the column accepts null.
    pub is_nullable: bool,
    /// Whether cells of this column may be edited.
    pub is_updatable: bool,
}

impl ColumnMetadata {
    pub fn new(escaped_name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            escaped_name: escaped_name.into(),
            ordinal: 0,
            data_type,
            is_key: false,
            is_nullable: true,
            is_updatable: true,
        }
    }

    pub fn key(mut self) -> Self {
        self.is_key = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    /// Mark as computed or otherwise not editable.
    pub fn read_only(mut self) -> Self {
        self.is_updatable = false;
        self
    }

    /// Take the authoritative shape of this column from the executed result set.
    fn extend(&mut self, db_column: &DbColumn) {
        self.data_type = db_column.data_type.clone();
        self.is_nullable = db_column.allow_null;
        self.is_key |= db_column.is_key;
        self.is_updatable &= !db_column.is_read_only;
    }
}

/// Metadata of the object an edit session works on.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    name: QualifiedName,
    object_type: ObjectType,
    columns: Vec<ColumnMetadata>,
    extended: bool,
}

impl TableMetadata {
    pub(crate) fn new(
        name: QualifiedName,
        object_type: ObjectType,
        columns: Vec<ColumnMetadata>,
    ) -> Self {
        Self {
            name,
            object_type,
            columns,
            extended: false,
        }
    }

    /// The schema-qualified name used in generated statements.
    pub fn escaped_multipart_name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&ColumnMetadata> {
        self.columns.get(index)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether result-set columns have been merged in.
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Merge the columns reported by the executed query, matched by position.
    pub fn extend(&mut self, db_columns: &[DbColumn]) -> MetadataResult<()> {
        if db_columns.len() != self.columns.len() {
            return Err(MetadataError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: db_columns.len(),
            });
        }
        for (column, db_column) in self.columns.iter_mut().zip(db_columns) {
            column.extend(db_column);
        }
        self.extended = true;
        Ok(())
    }
}
