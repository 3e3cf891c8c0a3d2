//! Result set types.

use tabledit_core::{DbCellValue, DbColumn, RowId};

use crate::{QueryError, QueryResult};

/// One row of a result set: cells in column order.
pub type Row = Vec<DbCellValue>;

/// Rows materialized by an executed query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<DbColumn>,
    rows: Vec<Row>,
}

impl ResultSet {
    /// Create an empty result set with the given columns.
    pub fn new(columns: Vec<DbColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a result set from rows, checking every row matches the column count.
    pub fn from_rows(columns: Vec<DbColumn>, rows: Vec<Row>) -> QueryResult<Self> {
        let mut result_set = Self::new(columns);
        for row in rows {
            result_set.push(row)?;
        }
        Ok(result_set)
    }

    /// Append a row.
    pub fn push(&mut self, row: Row) -> QueryResult<()> {
        if row.len() != self.columns.len() {
            return Err(QueryError::RowWidthMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[DbColumn] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    pub fn row(&self, index: RowId) -> Option<&[DbCellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Rows `[start, end)`, with `end` clamped to the row count.
    pub fn subset(&self, start: RowId, end: RowId) -> ResultSetSubset<'_> {
        ResultSetSubset::from_result_set(self, start, end)
    }
}

/// A window of consecutive rows borrowed from a result set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultSetSubset<'a> {
    start: RowId,
    rows: &'a [Row],
}

impl<'a> ResultSetSubset<'a> {
    /// Take rows `[start, end)`; out-of-range bounds produce a shorter or empty window.
    pub fn from_result_set(result_set: &'a ResultSet, start: RowId, end: RowId) -> Self {
        let end = end.min(result_set.row_count());
        if start >= end {
            return Self {
                start,
                rows: &[],
            };
        }
        Self {
            start,
            rows: &result_set.rows[start..end],
        }
    }

    /// Index of the first row of the window within the result set.
    pub fn start(&self) -> RowId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &'a [Row] {
        self.rows
    }

    /// Iterate rows together with their absolute row ids.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, &'a [DbCellValue])> + 'a {
        let start = self.start;
        let rows: &'a [Row] = self.rows;
        rows.iter()
            .enumerate()
            .map(move |(offset, row)| (start + offset, row.as_slice()))
    }
}
