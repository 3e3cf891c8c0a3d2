//! SELECT statement construction.
//!
//! Identifiers are only ever emitted through `quote_identifier`, so object,
//! schema and column names cannot break out of their quotes.

use tabledit_metadata::QualifiedName;

use crate::{QueryError, QueryResult};

/// Quote one identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote each part of a qualified name and join them with `.`.
pub fn quote_qualified_name(name: &QualifiedName) -> String {
    name.parts()
        .map(quote_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Builds `SELECT <columns> FROM <table> [LIMIT <n>]`.
///
/// `build` consumes the builder, so a limit never carries over into the
/// next statement.
#[derive(Debug, Clone)]
pub struct SelectQueryBuilder {
    table: QualifiedName,
    columns: Vec<String>,
    limit: Option<u64>,
}

impl SelectQueryBuilder {
    pub fn new(table: QualifiedName) -> Self {
        Self {
            table,
            columns: Vec::new(),
            limit: None,
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Limit the row count. Zero, negative or absent means no limit.
    pub fn limit(mut self, limit: Option<i64>) -> Self {
        self.limit = limit.and_then(|n| u64::try_from(n).ok()).filter(|n| *n > 0);
        self
    }

    pub fn build(self) -> QueryResult<String> {
        if self.columns.is_empty() {
            return Err(QueryError::no_columns(self.table.to_string()));
        }

        let columns = self
            .columns
            .iter()
            .map(|c| quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ");
        let limit_clause = match self.limit {
            Some(n) => format!("LIMIT {n}"),
            None => String::new(),
        };

        Ok(format!(
            "SELECT {} FROM {} {}",
            columns,
            quote_qualified_name(&self.table),
            limit_clause
        ))
    }
}
