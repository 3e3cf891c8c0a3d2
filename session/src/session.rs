//! Edit session.

use std::sync::Arc;
use tabledit_core::{messages, RowId};
use tabledit_metadata::{MetadataFactory, TableMetadata};
use tabledit_query::{completion_channel, ExecutionState, QueryExecutor, ResultSet};
use tracing::{debug, info, warn};

use crate::cache::EditCache;
use crate::edit::{RowEdit, RowUpdate};
use crate::error::{EditError, SessionError, SessionResult};
use crate::query::construct_initialize_query;
use crate::result::{EditCellResponse, EditRow};
use crate::state::{InitializingGuard, SessionState};
use crate::{EditSessionConfig, InitializeEditParams};

/// One client's table-editing conversation.
pub struct EditSession<F: MetadataFactory> {
    /// Resolves the edited object's metadata.
    metadata_factory: F,
    /// Shared with every pending edit.
    config: Arc<EditSessionConfig>,
    state: SessionState,
    /// Next identifier for a row added during editing.
    next_row_id: RowId,
    /// Rows loaded by the initializing query.
    result_set: Option<Arc<ResultSet>>,
    /// Metadata of the edited object, extended with the result-set columns.
    table_metadata: Option<Arc<TableMetadata>>,
    cache: EditCache,
}

impl<F: MetadataFactory> EditSession<F> {
    /// Create an uninitialized session with the default configuration.
    pub fn new(metadata_factory: F) -> Self {
        Self::with_config(metadata_factory, EditSessionConfig::default())
    }

    pub fn with_config(metadata_factory: F, config: EditSessionConfig) -> Self {
        Self {
            metadata_factory,
            config: Arc::new(config),
            state: SessionState::Uninitialized,
            next_row_id: 0,
            result_set: None,
            table_metadata: None,
            cache: EditCache::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_ready()
    }

    pub fn config(&self) -> &EditSessionConfig {
        &self.config
    }

    pub fn next_row_id(&self) -> RowId {
        self.next_row_id
    }

    /// Rows loaded by the initializing query, once ready.
    pub fn row_count(&self) -> Option<usize> {
        self.result_set.as_ref().map(|rs| rs.row_count())
    }

    pub fn table_metadata(&self) -> Option<&TableMetadata> {
        self.table_metadata.as_deref()
    }

    /// Number of rows with a cached edit.
    pub fn pending_edit_count(&self) -> usize {
        self.cache.len()
    }

    /// Resolve metadata, run the initializing query and adopt its result set.
    ///
    /// Resolution errors are returned before the executor is involved and
    /// leave the state untouched. Execution errors leave the session `Failed`.
    pub async fn initialize<E>(
        &mut self,
        params: &InitializeEditParams,
        connection: &F::Connection,
        executor: &E,
    ) -> SessionResult<()>
    where
        E: QueryExecutor + ?Sized,
    {
        let (metadata, sql) = self.prepare(params, connection)?;
        self.execute(params, metadata, sql, executor).await
    }

    /// Like [`initialize`](Self::initialize), but reports the outcome of
    /// execution through exactly one of `on_success` / `on_failure`.
    ///
    /// The returned error covers only what fails before execution starts.
    pub async fn initialize_with<E, S, R>(
        &mut self,
        params: &InitializeEditParams,
        connection: &F::Connection,
        executor: &E,
        on_success: S,
        on_failure: R,
    ) -> SessionResult<()>
    where
        E: QueryExecutor + ?Sized,
        S: FnOnce(),
        R: FnOnce(SessionError),
    {
        let (metadata, sql) = self.prepare(params, connection)?;
        match self.execute(params, metadata, sql, executor).await {
            Ok(()) => on_success(),
            Err(err) => on_failure(err),
        }
        Ok(())
    }

    fn prepare(
        &self,
        params: &InitializeEditParams,
        connection: &F::Connection,
    ) -> SessionResult<(TableMetadata, String)> {
        if self.state.is_ready() {
            return Err(SessionError::AlreadyInitialized);
        }

        let metadata = self.metadata_factory.get(
            connection,
            &params.schema_name,
            &params.object_name,
            params.object_type,
        )?;
        let sql = construct_initialize_query(&metadata, &params.filters)?;
        Ok((metadata, sql))
    }

    async fn execute<E>(
        &mut self,
        params: &InitializeEditParams,
        mut metadata: TableMetadata,
        sql: String,
        executor: &E,
    ) -> SessionResult<()>
    where
        E: QueryExecutor + ?Sized,
    {
        let guard = InitializingGuard::enter(&mut self.state);
        let (sender, receiver) = completion_channel();

        debug!(
            owner_uri = %params.owner_uri,
            table = %metadata.escaped_multipart_name(),
            sql = %sql,
            "dispatching edit session query"
        );
        executor.execute(sql, sender);
        let outcome = receiver.wait().await;

        match adopt_result_set(outcome, &mut metadata) {
            Ok(result_set) => {
                info!(
                    owner_uri = %params.owner_uri,
                    table = %metadata.escaped_multipart_name(),
                    rows = result_set.row_count(),
                    "edit session ready"
                );
                self.next_row_id = result_set.row_count();
                self.result_set = Some(Arc::new(result_set));
                self.table_metadata = Some(Arc::new(metadata));
                guard.settle(SessionState::Ready);
                Ok(())
            }
            Err(err) => {
                warn!(
                    owner_uri = %params.owner_uri,
                    error = %err,
                    "edit session initialization failed"
                );
                guard.settle(SessionState::Failed);
                Err(err)
            }
        }
    }

    /// Stage a new value for one cell.
    pub fn update_cell(
        &mut self,
        row_id: RowId,
        column_index: usize,
        new_value: &str,
    ) -> SessionResult<EditCellResponse> {
        let (Some(result_set), Some(metadata)) = (&self.result_set, &self.table_metadata) else {
            return Err(SessionError::NotInitialized);
        };
        if !self.state.is_ready() {
            return Err(SessionError::NotInitialized);
        }
        if row_id >= result_set.row_count() {
            return Err(EditError::RowOutOfRange {
                row_id,
                row_count: result_set.row_count(),
            }
            .into());
        }

        let config = &self.config;
        let edit = self.cache.get_or_insert_with(row_id, || {
            RowEdit::Update(RowUpdate::new(
                row_id,
                Arc::clone(result_set),
                Arc::clone(metadata),
                Arc::clone(config),
            ))
        });
        let response = edit.set_cell_value(column_index, new_value)?;

        debug!(
            row_id,
            column_index,
            dirty = response.cell.is_dirty,
            "cell updated"
        );
        Ok(response)
    }

    /// Render rows `[start_index, end_index)` with pending edits applied.
    ///
    /// A start past the last row yields no rows.
    pub fn get_rows(&self, start_index: RowId, end_index: RowId) -> SessionResult<Vec<EditRow>> {
        let result_set = self.ready_result_set()?;
        if start_index >= result_set.row_count() {
            return Ok(Vec::new());
        }

        let end_index = match self.config.max_rows_per_page {
            Some(max) => end_index.min(start_index.saturating_add(max)),
            None => end_index,
        };
        Ok(result_set
            .subset(start_index, end_index)
            .iter()
            .map(|(row_id, row)| match self.cache.get(row_id) {
                Some(edit) => edit.get_edit_row(row),
                None => EditRow::clean(row_id, row),
            })
            .collect())
    }

    fn ready_result_set(&self) -> SessionResult<&ResultSet> {
        match &self.result_set {
            Some(result_set) if self.state.is_ready() => Ok(result_set.as_ref()),
            _ => Err(SessionError::NotInitialized),
        }
    }
}

/// Check the execution outcome and take its result set.
fn adopt_result_set(
    outcome: Option<ExecutionState>,
    metadata: &mut TableMetadata,
) -> SessionResult<ResultSet> {
    let query = match outcome {
        None => return Err(SessionError::execution(messages::ERR_EXECUTION_ABANDONED)),
        Some(ExecutionState::Failed { message }) if message.is_empty() => {
            return Err(SessionError::execution(messages::ERR_EXECUTION_FAILED))
        }
        Some(ExecutionState::Failed { message }) => return Err(SessionError::execution(message)),
        Some(ExecutionState::Completed(query)) => query,
    };

    if !query.is_executed() {
        return Err(SessionError::execution(messages::ERR_EXECUTION_NOT_COMPLETED));
    }

    let result_set = query
        .into_first_result_set()
        .ok_or_else(|| SessionError::execution(messages::ERR_NO_RESULT_SET))?;
    metadata.extend(result_set.columns())?;
    Ok(result_set)
}
