//! Item source contract for the host rendering engine.
//!
//! The virtualization engine needs three things per virtual index: how
//! many rows exist, a stable key for each row, and (for scroll-position
//! stability) the index a key currently lives at. [`LazyItemSource`]
//! formalizes that contract; [`PagedItemProvider`] implements it over a
//! [`PagedList`], answering the reserved [`ItemKey::Loader`] key for the
//! loader slot.

use std::rc::Rc;

use crate::error::PagingError;
use crate::key::ItemKey;
use crate::paged_list::PagedList;

/// Provides the per-row information a lazy rendering engine needs.
///
/// Implementations should be immutable; when the underlying data
/// changes, the host creates a new source instance.
pub trait LazyItemSource {
    /// Total number of virtual rows, loader slot included.
    fn item_count(&self) -> usize;

    /// Stable key for the row at `index`.
    ///
    /// The loader slot answers [`ItemKey::Loader`], which no data row
    /// can produce. Out-of-range indices fail with
    /// [`PagingError::IndexOutOfRange`].
    fn key_for(&self, index: usize) -> Result<ItemKey, PagingError>;

    /// Index currently holding `key`, if any.
    fn index_of_key(&self, key: ItemKey) -> Option<usize> {
        (0..self.item_count()).find(|&index| self.key_for(index) == Ok(key))
    }
}

/// [`LazyItemSource`] over a paged snapshot plus a host key function.
///
/// The key function receives the index and the item and must return a
/// key that is stable across pages (an id, a hash of one). Index-based
/// keys would shift on every rebind and defeat scroll anchoring.
pub struct PagedItemProvider<T> {
    list: Rc<PagedList<T>>,
    key_of: Rc<dyn Fn(usize, &T) -> u64>,
}

impl<T> PagedItemProvider<T> {
    /// Wraps a snapshot with the host's key function.
    pub fn new(list: Rc<PagedList<T>>, key_of: impl Fn(usize, &T) -> u64 + 'static) -> Self {
        Self {
            list,
            key_of: Rc::new(key_of),
        }
    }

    /// The wrapped snapshot.
    pub fn list(&self) -> &Rc<PagedList<T>> {
        &self.list
    }
}

impl<T> LazyItemSource for PagedItemProvider<T> {
    fn item_count(&self) -> usize {
        self.list.len()
    }

    fn key_for(&self, index: usize) -> Result<ItemKey, PagingError> {
        if self.list.is_loader_slot(index)? {
            return Ok(ItemKey::Loader);
        }
        let item = self.list.get(index)?;
        Ok(ItemKey::Data((self.key_of)(index, item)))
    }

    fn index_of_key(&self, key: ItemKey) -> Option<usize> {
        match key {
            ItemKey::Loader => self.list.loader_index(),
            ItemKey::Data(_) => {
                (0..self.list.item_count()).find(|&index| self.key_for(index) == Ok(key))
            }
        }
    }
}
