//! Request gating for the trailing loader slot.
//!
//! [`PagingController`] decides, for every rendered virtual index,
//! whether the host's load-more callback should fire. The decision is a
//! three-way gate: connectivity must be up, the rendered index must fall
//! inside the trailing prefetch window, and no fetch may already be
//! outstanding for the bound snapshot. A manual retry bypasses the last
//! gate only.
//!
//! The controller never observes fetch results. Page arrival is
//! delivered out-of-band: the host constructs a new [`PagedList`] and
//! calls [`PagingController::rebind`], which re-arms the dedup guard for
//! the new loader slot.

use std::cell::Cell;
use std::rc::Rc;

use crate::connectivity::Connectivity;
use crate::load_state::{FetchState, LoaderAffordance, RetryOutcome};
use crate::paged_list::PagedList;

/// Default trailing-window size: fetch when the viewport comes within
/// this many items of the loader slot.
pub const DEFAULT_PREFETCH_THRESHOLD: usize = 25;

/// State machine gating load-more requests for one bound snapshot.
///
/// Single-threaded by design: `evaluate` calls arrive serially during a
/// render pass, so the Idle→Requested transition is an unpreempted
/// check-then-set on a [`Cell`]. The load-more callback is
/// fire-and-forget; the controller does not await or track it.
pub struct PagingController<T> {
    list: Rc<PagedList<T>>,
    prefetch_threshold: usize,
    state: Cell<FetchState>,
    connectivity: Rc<dyn Connectivity>,
    on_load_more: Box<dyn Fn(usize)>,
}

impl<T> PagingController<T> {
    /// Creates a controller with [`DEFAULT_PREFETCH_THRESHOLD`].
    ///
    /// `on_load_more` receives the loader slot's virtual index, from
    /// which the host derives the next page offset or cursor.
    pub fn new(
        list: Rc<PagedList<T>>,
        connectivity: Rc<dyn Connectivity>,
        on_load_more: impl Fn(usize) + 'static,
    ) -> Self {
        Self::with_threshold(list, connectivity, DEFAULT_PREFETCH_THRESHOLD, on_load_more)
    }

    /// Creates a controller with an explicit prefetch threshold.
    ///
    /// A threshold of zero fires only when the loader slot itself is
    /// rendered. A threshold at or above the item count is legal and
    /// fires on the first rendered index.
    pub fn with_threshold(
        list: Rc<PagedList<T>>,
        connectivity: Rc<dyn Connectivity>,
        prefetch_threshold: usize,
        on_load_more: impl Fn(usize) + 'static,
    ) -> Self {
        Self {
            list,
            prefetch_threshold,
            state: Cell::new(FetchState::Idle),
            connectivity,
            on_load_more: Box::new(on_load_more),
        }
    }

    /// The currently bound snapshot.
    pub fn list(&self) -> &Rc<PagedList<T>> {
        &self.list
    }

    /// Current fetch state for the bound snapshot.
    pub fn fetch_state(&self) -> FetchState {
        self.state.get()
    }

    /// The configured trailing-window size.
    pub fn prefetch_threshold(&self) -> usize {
        self.prefetch_threshold
    }

    /// Rebinds to a fresh snapshot after the host appended a page (or
    /// re-arms with an unchanged one after a failed fetch).
    ///
    /// Unconditionally resets the dedup guard: a new snapshot means a
    /// new loader slot and a fresh request opportunity.
    pub fn rebind(&mut self, list: Rc<PagedList<T>>) {
        self.list = list;
        self.state.set(FetchState::Idle);
    }

    /// Automatic trigger, called once per rendered virtual index on
    /// every render pass.
    ///
    /// Fires the load-more callback iff connectivity is up, `index` is
    /// within `prefetch_threshold` items of the loader slot, and no
    /// fetch was already requested for this snapshot. Returns whether it
    /// fired. A terminal snapshot never fires.
    pub fn evaluate(&self, index: usize) -> bool {
        let Some(loader_index) = self.list.loader_index() else {
            return false;
        };
        // Trailing window of size threshold + 1 ending at the loader.
        if index.saturating_add(self.prefetch_threshold) < loader_index {
            return false;
        }
        if self.state.get() == FetchState::Requested {
            log::debug!("load-more at index {index} suppressed: already requested");
            return false;
        }
        if !self.connectivity.is_connected() {
            log::debug!("load-more at index {index} suppressed: offline");
            return false;
        }
        self.dispatch(loader_index);
        true
    }

    /// Manual retry, wired to a user gesture on the loader row.
    ///
    /// Bypasses the dedup guard entirely; connectivity still gates. An
    /// offline retry fires nothing and reports
    /// [`RetryOutcome::Offline`] so the host can show a transient
    /// notification.
    pub fn retry(&self) -> RetryOutcome {
        let Some(loader_index) = self.list.loader_index() else {
            return RetryOutcome::Exhausted;
        };
        if !self.connectivity.is_connected() {
            log::debug!("manual retry while offline; nothing dispatched");
            return RetryOutcome::Offline;
        }
        self.dispatch(loader_index);
        RetryOutcome::Dispatched
    }

    /// What the loader row should show right now.
    pub fn loader_affordance(&self) -> LoaderAffordance {
        if self.connectivity.is_connected() {
            LoaderAffordance::Spinner
        } else {
            LoaderAffordance::Retry
        }
    }

    fn dispatch(&self, loader_index: usize) {
        log::debug!("dispatching load-more for loader slot {loader_index}");
        self.state.set(FetchState::Requested);
        (self.on_load_more)(loader_index);
    }
}
