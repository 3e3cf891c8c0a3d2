//! Session lifecycle state.
//!
//! `Uninitialized → Initializing → Ready`, with `Failed` reachable only from
//! `Initializing`. Nothing leaves `Ready`; `Failed` may be retried.

/// Lifecycle state of an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Created, initialize not yet requested.
    #[default]
    Uninitialized,
    /// Waiting for the initializing query to complete.
    Initializing,
    /// Result set adopted; edits and reads are allowed.
    Ready,
    /// The last initialization attempt failed or was abandoned.
    Failed,
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready)
    }
}

/// Holds a session in `Initializing` until settled.
///
/// Dropping it unsettled (the initialize future was dropped mid-flight)
/// leaves the session `Failed`.
pub(crate) struct InitializingGuard<'a> {
    state: &'a mut SessionState,
    settled: bool,
}

impl<'a> InitializingGuard<'a> {
    pub(crate) fn enter(state: &'a mut SessionState) -> Self {
        *state = SessionState::Initializing;
        Self {
            state,
            settled: false,
        }
    }

    pub(crate) fn settle(mut self, outcome: SessionState) {
        *self.state = outcome;
        self.settled = true;
    }
}

impl Drop for InitializingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.state = SessionState::Failed;
        }
    }
}
