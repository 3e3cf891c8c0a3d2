//! Pending row edits.
//!
//! A `RowEdit` is created the first time a row is touched and lives in the
//! session's cache until the session ends. It shares the result set and
//! metadata with the session through `Arc` and never points back at it.

use std::collections::BTreeMap;
use std::sync::Arc;
use tabledit_core::{CellValue, DbCellValue, RowId};
use tabledit_metadata::{ColumnMetadata, TableMetadata};
use tabledit_query::ResultSet;

use crate::error::{EditError, EditResult};
use crate::result::{EditCell, EditCellResponse, EditRow, EditRowState};
use crate::EditSessionConfig;

/// A pending change to one row.
#[derive(Debug, Clone)]
pub enum RowEdit {
    /// Cell-level updates to an existing row.
    Update(RowUpdate),
}

impl RowEdit {
    pub fn row_id(&self) -> RowId {
        match self {
            RowEdit::Update(update) => update.row_id(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        match self {
            RowEdit::Update(update) => update.is_dirty(),
        }
    }

    pub fn set_cell_value(
        &mut self,
        column_index: usize,
        new_value: &str,
    ) -> EditResult<EditCellResponse> {
        match self {
            RowEdit::Update(update) => update.set_cell_value(column_index, new_value),
        }
    }

    /// Render the row with this edit applied over `original`.
    pub fn get_edit_row(&self, original: &[DbCellValue]) -> EditRow {
        match self {
            RowEdit::Update(update) => update.get_edit_row(original),
        }
    }
}

/// New value of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellUpdate {
    pub column_index: usize,
    pub value: CellValue,
    pub display_value: String,
}

impl CellUpdate {
    /// Convert `text` to the column's type.
    pub fn new(column: &ColumnMetadata, text: &str, null_literal: &str) -> EditResult<Self> {
        let value = if text == null_literal {
            if !column.is_nullable {
                return Err(EditError::invalid_value(
                    &column.escaped_name,
                    tabledit_core::ValueError::null_not_allowed(&column.escaped_name),
                ));
            }
            CellValue::Null
        } else {
            column
                .data_type
                .parse(text)
                .map_err(|err| EditError::invalid_value(&column.escaped_name, err))?
        };

        // Floats keep the text as typed; `f64` formatting drops `2.0` to `2`.
        let display_value = match value {
            CellValue::Float(_) => text.trim().to_string(),
            _ => value.to_string(),
        };

        Ok(Self {
            column_index: column.ordinal,
            value,
            display_value,
        })
    }

    pub fn as_edit_cell(&self, row_id: RowId) -> EditCell {
        EditCell {
            display_value: self.display_value.clone(),
            is_null: self.value.is_null(),
            is_dirty: true,
            row_id,
        }
    }

    /// Whether this update would leave `original` unchanged.
    fn matches(&self, original: &DbCellValue, column: &ColumnMetadata) -> bool {
        if original.is_null || self.value.is_null() {
            return original.is_null && self.value.is_null();
        }
        match column.data_type.parse(&original.display_value) {
            Ok(value) => value == self.value,
            Err(_) => original.display_value == self.display_value,
        }
    }
}

/// Cell updates staged against one existing row.
#[derive(Debug, Clone)]
pub struct RowUpdate {
    row_id: RowId,
    result_set: Arc<ResultSet>,
    metadata: Arc<TableMetadata>,
    config: Arc<EditSessionConfig>,
    cell_updates: BTreeMap<usize, CellUpdate>,
}

impl RowUpdate {
    pub fn new(
        row_id: RowId,
        result_set: Arc<ResultSet>,
        metadata: Arc<TableMetadata>,
        config: Arc<EditSessionConfig>,
    ) -> Self {
        Self {
            row_id,
            result_set,
            metadata,
            config,
            cell_updates: BTreeMap::new(),
        }
    }

    pub fn row_id(&self) -> RowId {
        self.row_id
    }

    pub fn is_dirty(&self) -> bool {
        !self.cell_updates.is_empty()
    }

    pub fn cell_update(&self, column_index: usize) -> Option<&CellUpdate> {
        self.cell_updates.get(&column_index)
    }

    /// Stage `new_value` for a column. A value equal to the original clears
    /// the column's pending update instead.
    pub fn set_cell_value(
        &mut self,
        column_index: usize,
        new_value: &str,
    ) -> EditResult<EditCellResponse> {
        let column = self.metadata.column(column_index).ok_or(EditError::ColumnOutOfRange {
            index: column_index,
            column_count: self.metadata.column_count(),
        })?;
        if !column.is_updatable {
            return Err(EditError::column_not_updatable(&column.escaped_name));
        }

        let update = CellUpdate::new(column, new_value, &self.config.null_literal)?;

        let original = self
            .result_set
            .row(self.row_id)
            .and_then(|row| row.get(column_index));
        if let Some(original) = original {
            if update.matches(original, column) {
                self.cell_updates.remove(&column_index);
                return Ok(EditCellResponse {
                    cell: EditCell::clean(original, self.row_id),
                    is_row_dirty: self.is_dirty(),
                });
            }
        }

        let cell = update.as_edit_cell(self.row_id);
        self.cell_updates.insert(column_index, update);
        Ok(EditCellResponse {
            cell,
            is_row_dirty: true,
        })
    }

    /// Render `original` with the staged updates applied.
    pub fn get_edit_row(&self, original: &[DbCellValue]) -> EditRow {
        let cells = original
            .iter()
            .enumerate()
            .map(|(index, cell)| match self.cell_updates.get(&index) {
                Some(update) => update.as_edit_cell(self.row_id),
                None => EditCell::clean(cell, self.row_id),
            })
            .collect();

        EditRow {
            id: self.row_id,
            cells,
            state: if self.is_dirty() {
                EditRowState::DirtyUpdate
            } else {
                EditRowState::Clean
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{people_metadata, people_result_set};
    use pretty_assertions::assert_eq;

    fn update_for(row_id: RowId) -> RowUpdate {
        RowUpdate::new(
            row_id,
            Arc::new(people_result_set()),
            Arc::new(people_metadata()),
            Arc::new(EditSessionConfig::default()),
        )
    }

    #[test]
    fn test_set_cell_value_marks_dirty() {
        // GIVEN
        let mut update = update_for(1);

        // WHEN
        let response = update.set_cell_value(1, "B").unwrap();

        // THEN
        assert_eq!(
            response,
            EditCellResponse {
                cell: EditCell {
                    display_value: "B".to_string(),
                    is_null: false,
                    is_dirty: true,
                    row_id: 1,
                },
                is_row_dirty: true,
            }
        );
        assert!(update.is_dirty());
    }

    #[test]
    fn test_setting_original_value_clears_update() {
        // GIVEN a row whose name was edited
        let mut update = update_for(1);
        update.set_cell_value(1, "B").unwrap();

        // WHEN the original value is written back
        let response = update.set_cell_value(1, "b").unwrap();

        // THEN the cell and the row are clean again
        assert!(!response.cell.is_dirty);
        assert!(!response.is_row_dirty);
        assert_eq!(response.cell.display_value, "b");
        assert!(update.cell_update(1).is_none());
    }

    #[test]
    fn test_equal_by_value_is_not_dirty() {
        let mut update = update_for(0);

        let response = update.set_cell_value(0, " 1 ").unwrap();

        assert!(!response.cell.is_dirty);
    }

    #[test]
    fn test_column_out_of_range() {
        let mut update = update_for(0);

        let result = update.set_cell_value(5, "x");

        assert!(matches!(
            result,
            Err(EditError::ColumnOutOfRange {
                index: 5,
                column_count: 3
            })
        ));
    }

    #[test]
    fn test_read_only_column_rejected() {
        let mut update = update_for(0);

        let result = update.set_cell_value(2, "10");

        assert!(matches!(result, Err(EditError::ColumnNotUpdatable { column }) if column == "score"));
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let mut update = update_for(0);

        let result = update.set_cell_value(0, "one");

        assert!(matches!(result, Err(EditError::InvalidValue { column, .. }) if column == "id"));
        assert!(!update.is_dirty());
    }

    #[test]
    fn test_null_literal() {
        // GIVEN
        let mut update = update_for(0);

        // WHEN
        let nullable = update.set_cell_value(1, "NULL").unwrap();
        let not_null = update.set_cell_value(0, "NULL");

        // THEN
        assert!(nullable.cell.is_null);
        assert!(nullable.cell.is_dirty);
        assert!(matches!(
            not_null,
            Err(EditError::InvalidValue {
                source: tabledit_core::ValueError::NullNotAllowed { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_float_update_keeps_typed_text() {
        // GIVEN
        let column = ColumnMetadata::new("ratio", tabledit_core::ColumnType::Float);

        // WHEN
        let plain = CellUpdate::new(&column, "2.0", "NULL").unwrap();
        let exponent = CellUpdate::new(&column, " 1e3 ", "NULL").unwrap();

        // THEN
        assert_eq!(plain.value, CellValue::Float(2.0));
        assert_eq!(plain.as_edit_cell(0).display_value, "2.0");
        assert_eq!(exponent.value, CellValue::Float(1000.0));
        assert_eq!(exponent.display_value, "1e3");
    }

    #[test]
    fn test_get_edit_row_overlays_updates() {
        // GIVEN
        let result_set = people_result_set();
        let mut edit = RowEdit::Update(update_for(2));
        edit.set_cell_value(1, "C").unwrap();

        // WHEN
        let row = edit.get_edit_row(result_set.row(2).unwrap());

        // THEN
        assert_eq!(row.id, 2);
        assert_eq!(row.state, EditRowState::DirtyUpdate);
        let cells: Vec<_> = row
            .cells
            .iter()
            .map(|c| (c.display_value.as_str(), c.is_dirty))
            .collect();
        assert_eq!(cells, vec![("3", false), ("C", true), ("30", false)]);
        assert_eq!(edit.row_id(), 2);
        assert!(edit.is_dirty());
    }
}
