//! Query construction for edit sessions.
//!
//! A session is populated by a single SELECT over every column of the
//! edited object, optionally capped by the request's row limit.

use tabledit_metadata::TableMetadata;
use tabledit_query::SelectQueryBuilder;

use crate::error::SessionResult;
use crate::EditInitializerFilter;

/// Build the statement that loads the rows of the edited object.
pub fn construct_initialize_query(
    metadata: &TableMetadata,
    filters: &EditInitializerFilter,
) -> SessionResult<String> {
    let sql = SelectQueryBuilder::new(metadata.escaped_multipart_name().clone())
        .columns(metadata.columns().iter().map(|c| c.escaped_name.as_str()))
        .limit(filters.limit_results)
        .build()?;
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabledit_core::ColumnType;
    use tabledit_metadata::{ColumnMetadata, TableMetadataBuilder};

    fn table_t() -> TableMetadata {
        TableMetadataBuilder::table("public", "t")
            .column(ColumnMetadata::new("id", ColumnType::Integer))
            .column(ColumnMetadata::new("name", ColumnType::Text))
            .build()
            .unwrap()
    }

    #[test]
    fn test_query_without_filters() {
        // GIVEN
        let metadata = table_t();

        // WHEN
        let sql = construct_initialize_query(&metadata, &EditInitializerFilter::default()).unwrap();

        // THEN
        assert_eq!(sql, "SELECT \"id\", \"name\" FROM \"public\".\"t\" ");
    }

    #[test]
    fn test_query_with_limit() {
        let metadata = table_t();

        let sql = construct_initialize_query(&metadata, &EditInitializerFilter::limit(10)).unwrap();

        assert!(sql.ends_with(" LIMIT 10"));
    }

    #[test]
    fn test_limit_not_reused_across_calls() {
        // GIVEN one query built with a limit
        let metadata = table_t();
        let _ = construct_initialize_query(&metadata, &EditInitializerFilter::limit(3)).unwrap();

        // WHEN the next one has no limit
        let sql = construct_initialize_query(&metadata, &EditInitializerFilter::default()).unwrap();

        // THEN no LIMIT clause appears
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn test_zero_limit_is_ignored() {
        let metadata = table_t();

        let sql = construct_initialize_query(&metadata, &EditInitializerFilter::limit(0)).unwrap();

        assert_eq!(sql, "SELECT \"id\", \"name\" FROM \"public\".\"t\" ");
    }
}
