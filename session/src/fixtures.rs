//! Shared test data: `public.people(id, name, score)` with three rows.

use tabledit_core::{ColumnType, DbCellValue, DbColumn};
use tabledit_metadata::{
    ColumnMetadata, InMemoryMetadataFactory, TableMetadata, TableMetadataBuilder,
};
use tabledit_query::{CompletionSender, ExecutionState, Query, ResultSet};

pub(crate) fn people_columns() -> Vec<DbColumn> {
    vec![
        DbColumn::new("id", ColumnType::Integer).key().not_null(),
        DbColumn::new("name", ColumnType::Text),
        DbColumn::new("score", ColumnType::Integer).read_only(),
    ]
}

pub(crate) fn people_result_set() -> ResultSet {
    let rows = [("1", "a", "10"), ("2", "b", "20"), ("3", "c", "30")]
        .into_iter()
        .map(|(id, name, score)| {
            vec![
                DbCellValue::new(id),
                DbCellValue::new(name),
                DbCellValue::new(score),
            ]
        })
        .collect();
    ResultSet::from_rows(people_columns(), rows).unwrap()
}

/// Metadata as the catalog reports it, before extension.
pub(crate) fn people_catalog_metadata() -> TableMetadata {
    TableMetadataBuilder::table("public", "people")
        .column(ColumnMetadata::new("id", ColumnType::Integer).key())
        .column(ColumnMetadata::new("name", ColumnType::Text))
        .column(ColumnMetadata::new("score", ColumnType::Integer))
        .build()
        .unwrap()
}

/// Metadata after extension with the result-set columns.
pub(crate) fn people_metadata() -> TableMetadata {
    let mut metadata = people_catalog_metadata();
    metadata.extend(&people_columns()).unwrap();
    metadata
}

pub(crate) fn people_factory() -> InMemoryMetadataFactory {
    InMemoryMetadataFactory::new().with(people_catalog_metadata())
}

/// Executor that completes immediately with the people rows.
pub(crate) fn people_executor(_sql: String, on_complete: CompletionSender) {
    on_complete.complete(ExecutionState::Completed(Query::executed(
        people_result_set(),
    )));
}
