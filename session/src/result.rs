//! Row and cell views returned to clients.

use serde::{Deserialize, Serialize};
use tabledit_core::{DbCellValue, RowId};

/// Pending-change state of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditRowState {
    /// No pending change.
    Clean,
    /// One or more cells carry a pending update.
    DirtyUpdate,
}

/// One cell of a rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCell {
    pub display_value: String,
    pub is_null: bool,
    /// Whether the displayed value comes from a pending edit.
    pub is_dirty: bool,
    pub row_id: RowId,
}

impl EditCell {
    /// The original cell, unchanged.
    pub fn clean(cell: &DbCellValue, row_id: RowId) -> Self {
        Self {
            display_value: cell.display_value.clone(),
            is_null: cell.is_null,
            is_dirty: false,
            row_id,
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRow {
    pub id: RowId,
    pub cells: Vec<EditCell>,
    pub state: EditRowState,
}

impl EditRow {
    /// Render a row that has no pending edit.
    pub fn clean(id: RowId, cells: &[DbCellValue]) -> Self {
        Self {
            id,
            cells: cells.iter().map(|cell| EditCell::clean(cell, id)).collect(),
            state: EditRowState::Clean,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.state != EditRowState::Clean
    }
}

/// Outcome of a cell update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCellResponse {
    /// The cell as it now renders.
    pub cell: EditCell,
    /// Whether the row still has any pending change.
    pub is_row_dirty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_row_copies_display_values() {
        // GIVEN
        let cells = vec![DbCellValue::new("1"), DbCellValue::null()];

        // WHEN
        let row = EditRow::clean(4, &cells);

        // THEN
        assert_eq!(row.id, 4);
        assert!(!row.is_dirty());
        assert_eq!(row.cells[0].display_value, "1");
        assert!(row.cells[1].is_null);
        assert!(row.cells.iter().all(|c| !c.is_dirty && c.row_id == 4));
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let row = EditRow::clean(0, &[DbCellValue::new("a")]);

        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 0,
                "cells": [{ "displayValue": "a", "isNull": false, "isDirty": false, "rowId": 0 }],
                "state": "clean"
            })
        );
    }
}
