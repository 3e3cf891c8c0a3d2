//! Asynchronous query execution.
//!
//! The execution engine is external. A session hands it the SQL text and a
//! `CompletionSender`; the engine runs the statement on its own schedule and
//! reports the outcome through the sender exactly once. `complete` consumes
//! the sender, so a second report cannot be expressed.

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::ResultSet;

/// Lifecycle of a query inside the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryExecutionStatus {
    NotStarted,
    Queued,
    Executing,
    Executed,
}

/// One batch of an executed query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub result_set: Option<ResultSet>,
}

impl Batch {
    pub fn new(result_set: ResultSet) -> Self {
        Self {
            result_set: Some(result_set),
        }
    }

    /// A batch that produced no rows at all (e.g. a DDL statement).
    pub fn without_result_set() -> Self {
        Self { result_set: None }
    }
}

/// A query as reported back by the execution engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub status: QueryExecutionStatus,
    pub batches: Vec<Batch>,
}

impl Query {
    pub fn new(status: QueryExecutionStatus, batches: Vec<Batch>) -> Self {
        Self { status, batches }
    }

    /// A fully executed single-batch query.
    pub fn executed(result_set: ResultSet) -> Self {
        Self::new(QueryExecutionStatus::Executed, vec![Batch::new(result_set)])
    }

    pub fn is_executed(&self) -> bool {
        self.status == QueryExecutionStatus::Executed
    }

    /// Take the result set of the first batch.
    pub fn into_first_result_set(self) -> Option<ResultSet> {
        self.batches.into_iter().next().and_then(|batch| batch.result_set)
    }
}

/// Outcome delivered to a session when execution finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionState {
    /// The engine produced a query object; its status still needs checking.
    Completed(Query),
    /// The engine failed before producing a query.
    Failed { message: String },
}

impl ExecutionState {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Sending half of a one-shot execution completion.
#[derive(Debug)]
pub struct CompletionSender {
    tx: oneshot::Sender<ExecutionState>,
}

impl CompletionSender {
    /// Report the outcome. Returns false if nobody is waiting any more.
    pub fn complete(self, state: ExecutionState) -> bool {
        self.tx.send(state).is_ok()
    }

    /// Whether the waiting side has gone away; the engine may abandon the work.
    pub fn is_cancelled(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half of a one-shot execution completion.
#[derive(Debug)]
pub struct CompletionReceiver {
    rx: oneshot::Receiver<ExecutionState>,
}

impl CompletionReceiver {
    /// Wait for the outcome. `None` if the sender was dropped without reporting.
    pub async fn wait(self) -> Option<ExecutionState> {
        self.rx.await.ok()
    }
}

/// Create a linked sender/receiver pair.
pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    let (tx, rx) = oneshot::channel();
    (CompletionSender { tx }, CompletionReceiver { rx })
}

/// The execution engine, as seen by an edit session.
pub trait QueryExecutor {
    /// Start executing `sql`; report through `on_complete` when done.
    fn execute(&self, sql: String, on_complete: CompletionSender);
}

impl<F> QueryExecutor for F
where
    F: Fn(String, CompletionSender),
{
    fn execute(&self, sql: String, on_complete: CompletionSender) {
        self(sql, on_complete)
    }
}
