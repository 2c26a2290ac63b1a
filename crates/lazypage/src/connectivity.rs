//! Connectivity seam.
//!
//! Rather than consulting a process-global network flag, the controller
//! is handed a [`Connectivity`] capability at construction, so the
//! gating logic stays testable without a real network layer. The signal
//! is polled synchronously at every evaluate call and at retry time.

use std::cell::Cell;
use std::rc::Rc;

/// Synchronous network-availability query.
pub trait Connectivity {
    /// Whether the network is currently usable for a page fetch.
    fn is_connected(&self) -> bool;
}

impl<F: Fn() -> bool> Connectivity for F {
    fn is_connected(&self) -> bool {
        self()
    }
}

/// Shared connectivity flag for single-threaded hosts.
///
/// Clones observe the same underlying flag; the host flips it from its
/// connectivity listener, the controller polls it during render passes.
#[derive(Clone, Debug, Default)]
pub struct SharedConnectivity {
    connected: Rc<Cell<bool>>,
}

impl SharedConnectivity {
    /// Creates a flag with the given initial state.
    pub fn new(connected: bool) -> Self {
        Self {
            connected: Rc::new(Cell::new(connected)),
        }
    }

    /// Updates the flag. Takes effect on the next poll.
    pub fn set_connected(&self, connected: bool) {
        self.connected.set(connected);
    }
}

impl Connectivity for SharedConnectivity {
    fn is_connected(&self) -> bool {
        self.connected.get()
    }
}
