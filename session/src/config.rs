//! Configuration for edit sessions

use serde::{Deserialize, Serialize};
use tabledit_core::messages::NULL_DISPLAY;

/// Configuration for edit sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditSessionConfig {
    /// Cell text that stands for SQL NULL in an update
    pub null_literal: String,
    /// Most rows a single row fetch returns; `None` for no cap
    pub max_rows_per_page: Option<usize>,
}

impl Default for EditSessionConfig {
    fn default() -> Self {
        Self {
            null_literal: NULL_DISPLAY.to_string(),
            max_rows_per_page: None,
        }
    }
}

impl EditSessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_null_literal(mut self, literal: impl Into<String>) -> Self {
        self.null_literal = literal.into();
        self
    }

    pub fn with_max_rows_per_page(mut self, max: usize) -> Self {
        self.max_rows_per_page = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EditSessionConfig = serde_json::from_str(r#"{"max_rows_per_page": 50}"#).unwrap();

        assert_eq!(config.null_literal, "NULL");
        assert_eq!(config.max_rows_per_page, Some(50));
    }

    #[test]
    fn test_builder_methods() {
        let config = EditSessionConfig::new()
            .with_null_literal("<null>")
            .with_max_rows_per_page(10);

        assert_eq!(config.null_literal, "<null>");
        assert_eq!(config.max_rows_per_page, Some(10));
    }
}
