//! Column descriptors and raw cells produced by query execution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CellValue, ValueError, ValueResult};

/// Declared type of a column, as far as cell editing cares about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    Boolean,
    Integer,
    Float,
    Text,
    /// Any type without a dedicated conversion; edits keep the text verbatim.
    Other(String),
}

impl ColumnType {
    /// Map a database type name (e.g. `int4`, `character varying`) to a column type.
    pub fn from_type_name(name: &str) -> Self {
        let lowered = name.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "bool" | "boolean" => ColumnType::Boolean,
            "int" | "int2" | "int4" | "int8" | "smallint" | "integer" | "bigint" | "serial"
            | "smallserial" | "bigserial" => ColumnType::Integer,
            "float4" | "float8" | "real" | "double precision" | "float" => ColumnType::Float,
            "text" | "varchar" | "character varying" | "char" | "character" | "bpchar"
            | "name" => ColumnType::Text,
            _ => ColumnType::Other(lowered),
        }
    }

    /// Canonical name of this type.
    pub fn name(&self) -> &str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
            ColumnType::Other(name) => name,
        }
    }

    /// Convert non-null cell text into a value of this type.
    pub fn parse(&self, text: &str) -> ValueResult<CellValue> {
        match self {
            ColumnType::Boolean => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "t" | "yes" | "y" | "1" => Ok(CellValue::Bool(true)),
                "false" | "f" | "no" | "n" | "0" => Ok(CellValue::Bool(false)),
                _ => Err(ValueError::invalid_literal(text, self.name())),
            },
            ColumnType::Integer => text
                .trim()
                .parse::<i64>()
                .map(CellValue::Int)
                .map_err(|_| ValueError::invalid_literal(text, self.name())),
            ColumnType::Float => text
                .trim()
                .parse::<f64>()
                .map(CellValue::Float)
                .map_err(|_| ValueError::invalid_literal(text, self.name())),
            ColumnType::Text | ColumnType::Other(_) => Ok(CellValue::Text(text.to_string())),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        ColumnType::from_type_name(&name)
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        column_type.name().to_string()
    }
}

/// A result-set column as reported by the query execution engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbColumn {
    pub column_name: String,
    pub data_type: ColumnType,
    pub allow_null: bool,
    pub is_key: bool,
    pub is_read_only: bool,
}

impl DbColumn {
    pub fn new(column_name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            column_name: column_name.into(),
            data_type,
            allow_null: true,
            is_key: false,
            is_read_only: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.allow_null = false;
        self
    }

    pub fn key(mut self) -> Self {
        self.is_key = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }
}

/// One raw cell of a result-set row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbCellValue {
    pub display_value: String,
    pub is_null: bool,
}

impl DbCellValue {
    pub fn new(display_value: impl Into<String>) -> Self {
        Self {
            display_value: display_value.into(),
            is_null: false,
        }
    }

    pub fn null() -> Self {
        Self {
            display_value: crate::messages::NULL_DISPLAY.to_string(),
            is_null: true,
        }
    }
}
