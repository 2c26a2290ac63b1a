//! Immutable paged snapshot of loaded items.
//!
//! [`PagedList`] wraps the items loaded so far plus a `has_more` flag and
//! exposes a *virtual* index space: when more pages remain, one synthetic
//! loader slot is appended after the last real item. The loader slot is
//! addressable (for keying and row classification) but never readable as
//! data — [`PagedList::get`] refuses it so the render path is forced to
//! branch on [`PagedList::is_loader_slot`] first.
//!
//! A snapshot is immutable. Loading a page never patches an existing
//! list; the host constructs a new `PagedList` with the appended items
//! and rebinds the controller to it. This keeps every snapshot safely
//! readable while different rows of the same render pass are composed.

use std::ops::Range;

use crate::error::PagingError;

/// Loaded items plus an optional trailing loader slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagedList<T> {
    items: Vec<T>,
    has_more: bool,
}

impl<T> PagedList<T> {
    /// Creates a snapshot from the items loaded so far.
    ///
    /// `has_more = true` appends the loader slot; `has_more = false`
    /// produces a terminal snapshot with no loader.
    pub fn new(items: Vec<T>, has_more: bool) -> Self {
        Self { items, has_more }
    }

    /// The initial snapshot before any page has arrived: no items, one
    /// loader slot.
    pub fn initial() -> Self {
        Self::new(Vec::new(), true)
    }

    /// Virtual size: real items plus the loader slot when present.
    pub fn len(&self) -> usize {
        if self.has_more {
            self.items.len() + 1
        } else {
            self.items.len()
        }
    }

    /// True when the virtual size is zero (terminal snapshot with no
    /// items). A fresh [`PagedList::initial`] is *not* empty: the loader
    /// slot counts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of real loaded items, excluding the loader slot.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether a trailing loader slot exists.
    pub fn has_loader(&self) -> bool {
        self.has_more
    }

    /// Virtual index of the loader slot, or `None` on a terminal
    /// snapshot.
    pub fn loader_index(&self) -> Option<usize> {
        if self.has_more {
            Some(self.items.len())
        } else {
            None
        }
    }

    /// True iff `index` addresses the loader slot.
    ///
    /// Valid for `0 <= index < len()`; anything else is a programming
    /// error and fails with [`PagingError::IndexOutOfRange`].
    pub fn is_loader_slot(&self, index: usize) -> Result<bool, PagingError> {
        if index >= self.len() {
            return Err(PagingError::IndexOutOfRange {
                index,
                size: self.len(),
            });
        }
        Ok(self.has_more && index == self.len() - 1)
    }

    /// Returns the item at `index`.
    ///
    /// Fails with [`PagingError::LoaderSlotAccess`] when `index` is the
    /// loader slot. This is a hard guard, not a convenience: silent type
    /// confusion between a real item and the loading placeholder is the
    /// classic pagination bug, so callers must branch on
    /// [`is_loader_slot`](Self::is_loader_slot) before dereferencing.
    pub fn get(&self, index: usize) -> Result<&T, PagingError> {
        if self.is_loader_slot(index)? {
            log::warn!(
                "PagedList::get({index}) hit the loader slot; add an is_loader_slot check \
                 before reading"
            );
            return Err(PagingError::LoaderSlotAccess { index });
        }
        Ok(&self.items[index])
    }

    /// The real loaded items, without the loader slot.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the real loaded items only.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Sub-range views are unsupported.
    ///
    /// A partial view cannot represent whether the sub-range still ends
    /// in a loader slot, so slicing would silently break the loader-slot
    /// invariant. Always fails with [`PagingError::Unsupported`].
    pub fn slice(&self, range: Range<usize>) -> Result<&[T], PagingError> {
        let _ = range;
        Err(PagingError::Unsupported(
            "sub-range views cannot carry the trailing loader slot",
        ))
    }
}

impl<T: PartialEq> PagedList<T> {
    /// True iff `item` is among the real loaded items.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Index of `item` among the real loaded items.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
