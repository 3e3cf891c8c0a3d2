//! Pending edits keyed by row.

use std::collections::HashMap;
use tabledit_core::RowId;

use crate::RowEdit;

/// Pending edits of one session, at most one per row.
#[derive(Debug, Default)]
pub struct EditCache {
    edits: HashMap<RowId, RowEdit>,
}

impl EditCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row_id: RowId) -> Option<&RowEdit> {
        self.edits.get(&row_id)
    }

    /// Get the edit for `row_id`, creating it with `create` on first use.
    pub fn get_or_insert_with<F>(&mut self, row_id: RowId, create: F) -> &mut RowEdit
    where
        F: FnOnce() -> RowEdit,
    {
        self.edits.entry(row_id).or_insert_with(create)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{people_metadata, people_result_set};
    use crate::{EditSessionConfig, RowUpdate};
    use std::sync::Arc;

    fn new_update(row_id: RowId) -> RowEdit {
        RowEdit::Update(RowUpdate::new(
            row_id,
            Arc::new(people_result_set()),
            Arc::new(people_metadata()),
            Arc::new(EditSessionConfig::default()),
        ))
    }

    #[test]
    fn test_get_or_insert_creates_once() {
        // GIVEN
        let mut cache = EditCache::new();

        // WHEN the same row is looked up twice
        cache
            .get_or_insert_with(1, || new_update(1))
            .set_cell_value(1, "x")
            .unwrap();
        let second = cache.get_or_insert_with(1, || panic!("row 1 already cached"));

        // THEN the first entry is returned
        assert!(second.is_dirty());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(1).map(RowEdit::row_id), Some(1));
    }

    #[test]
    fn test_get_missing_row() {
        let cache = EditCache::new();

        assert!(cache.get(0).is_none());
        assert!(cache.is_empty());
    }
}
