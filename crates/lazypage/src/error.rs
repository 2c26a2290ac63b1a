//! Error taxonomy for paged list access.
//!
//! All variants are fail-fast programming errors in the host's render
//! path. None of them are transient: a caller that hits one is missing
//! a branch (usually an [`is_loader_slot`] check), not experiencing a
//! recoverable runtime condition. Network unavailability is deliberately
//! *not* in this enum — it is a steady state surfaced through
//! [`LoaderAffordance`] and [`RetryOutcome`] instead.
//!
//! [`is_loader_slot`]: crate::PagedList::is_loader_slot
//! [`LoaderAffordance`]: crate::LoaderAffordance
//! [`RetryOutcome`]: crate::RetryOutcome

use thiserror::Error;

/// Errors produced by [`PagedList`](crate::PagedList) queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    /// A data read was attempted at the synthetic loader slot.
    ///
    /// The fix is always on the caller side: branch on
    /// `is_loader_slot(index)` before calling `get(index)`.
    #[error(
        "get can't be performed: the loader slot occupies virtual index {index}; \
         check is_loader_slot before reading"
    )]
    LoaderSlotAccess { index: usize },

    /// A virtual index outside `[0, size)` was used.
    #[error("virtual index {index} out of range for virtual size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// The requested operation cannot be expressed on a paged snapshot.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
