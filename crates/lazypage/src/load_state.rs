//! Fetch and loader-row state.

/// Whether a fetch has been dispatched for the currently bound snapshot.
///
/// The flag is scoped to one [`PagedList`](crate::PagedList) instance:
/// rebinding the controller to a new snapshot is the only reset path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchState {
    /// No fetch requested for the current loader slot yet.
    #[default]
    Idle,
    /// A fetch was dispatched; automatic triggers are suppressed until
    /// rebind.
    Requested,
}

/// What the loader row should present, given current connectivity.
///
/// This is the orthogonal "blocked" axis of the state machine: it does
/// not care whether a fetch is already in flight, only whether showing
/// a progress indicator makes sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderAffordance {
    /// Connectivity is available: show a progress indicator.
    Spinner,
    /// Connectivity is down: show a retry affordance.
    Retry,
}

/// Result of a manual retry tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryOutcome {
    /// Connectivity returned and a fetch was dispatched.
    Dispatched,
    /// Still offline; the host should surface a transient
    /// "no connection" notification.
    Offline,
    /// Nothing left to fetch: the bound snapshot is terminal.
    Exhausted,
}
