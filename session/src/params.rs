//! Initialization request parameters.

use serde::{Deserialize, Serialize};
use tabledit_metadata::ObjectType;

/// Row filters applied by the initializing query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditInitializerFilter {
    /// Maximum rows to load; only a positive value limits the query.
    #[serde(default)]
    pub limit_results: Option<i64>,
}

impl EditInitializerFilter {
    pub fn limit(limit_results: i64) -> Self {
        Self {
            limit_results: Some(limit_results),
        }
    }
}

/// Parameters of an initialize request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeEditParams {
    /// Identifies the conversation that owns the session.
    #[serde(default)]
    pub owner_uri: String,
    pub schema_name: String,
    pub object_name: String,
    pub object_type: ObjectType,
    #[serde(default)]
    pub filters: EditInitializerFilter,
}

impl InitializeEditParams {
    pub fn table(schema_name: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self {
            owner_uri: String::new(),
            schema_name: schema_name.into(),
            object_name: object_name.into(),
            object_type: ObjectType::Table,
            filters: EditInitializerFilter::default(),
        }
    }

    pub fn with_owner_uri(mut self, owner_uri: impl Into<String>) -> Self {
        self.owner_uri = owner_uri.into();
        self
    }

    pub fn with_object_type(mut self, object_type: ObjectType) -> Self {
        self.object_type = object_type;
        self
    }

    pub fn with_filters(mut self, filters: EditInitializerFilter) -> Self {
        self.filters = filters;
        self
    }
}
