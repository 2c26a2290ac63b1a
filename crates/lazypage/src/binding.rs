//! Per-row render protocol.
//!
//! [`PagedBinding`] is the piece the rendering engine talks to while it
//! iterates visible rows. For every rendered virtual index, [`row`]
//! first notifies the controller (so the trailing-window check runs on
//! every pass, not only when a row first appears) and then classifies
//! the row as a data item or the loader with its current affordance.
//!
//! [`row`]: PagedBinding::row

use crate::controller::PagingController;
use crate::error::PagingError;
use crate::load_state::{LoaderAffordance, RetryOutcome};

/// What to render at one virtual index.
#[derive(Debug, PartialEq, Eq)]
pub enum Row<'a, T> {
    /// A real loaded item.
    Item(&'a T),
    /// The trailing loader slot and what it should show.
    Loader(LoaderAffordance),
}

/// Engine-facing view over a controller and its bound snapshot.
pub struct PagedBinding<'c, T> {
    controller: &'c PagingController<T>,
}

impl<'c, T> PagedBinding<'c, T> {
    /// Borrows a controller for one or more render passes.
    pub fn new(controller: &'c PagingController<T>) -> Self {
        Self { controller }
    }

    /// Number of virtual rows to render.
    pub fn len(&self) -> usize {
        self.controller.list().len()
    }

    /// True when there is nothing to render at all.
    pub fn is_empty(&self) -> bool {
        self.controller.list().is_empty()
    }

    /// Resolves the row at `index`, triggering the load-more evaluation
    /// as a side effect.
    ///
    /// Must be called for every rendered index of every pass; skipping
    /// indices would keep the prefetch window from re-evaluating as the
    /// viewport moves.
    pub fn row(&self, index: usize) -> Result<Row<'_, T>, PagingError> {
        let list = self.controller.list();
        // Validate the index before notifying the controller; an
        // out-of-range index must not count as a rendered row.
        let is_loader = list.is_loader_slot(index)?;
        self.controller.evaluate(index);
        if is_loader {
            Ok(Row::Loader(self.controller.loader_affordance()))
        } else {
            Ok(Row::Item(list.get(index)?))
        }
    }

    /// Forwards a retry tap on the loader row.
    pub fn retry(&self) -> RetryOutcome {
        self.controller.retry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::SharedConnectivity;
    use crate::paged_list::PagedList;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller(
        items: usize,
        has_more: bool,
        network: &SharedConnectivity,
    ) -> (PagingController<usize>, Rc<RefCell<Vec<usize>>>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let probe = Rc::clone(&fired);
        let controller = PagingController::with_threshold(
            Rc::new(PagedList::new((0..items).collect(), has_more)),
            Rc::new(network.clone()),
            2,
            move |loader_index| probe.borrow_mut().push(loader_index),
        );
        (controller, fired)
    }

    #[test]
    fn test_rows_classify_items_and_loader() {
        let network = SharedConnectivity::new(true);
        let (controller, _) = controller(3, true, &network);
        let binding = PagedBinding::new(&controller);

        assert_eq!(binding.len(), 4);
        assert_eq!(binding.row(0), Ok(Row::Item(&0)));
        assert_eq!(binding.row(2), Ok(Row::Item(&2)));
        assert_eq!(binding.row(3), Ok(Row::Loader(LoaderAffordance::Spinner)));
    }

    #[test]
    fn test_loader_row_shows_retry_when_offline() {
        let network = SharedConnectivity::new(false);
        let (controller, fired) = controller(3, true, &network);
        let binding = PagedBinding::new(&controller);

        assert_eq!(binding.row(3), Ok(Row::Loader(LoaderAffordance::Retry)));
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_render_pass_triggers_load_more_once() {
        let network = SharedConnectivity::new(true);
        let (controller, fired) = controller(5, true, &network);
        let binding = PagedBinding::new(&controller);

        for index in 0..binding.len() {
            binding.row(index).unwrap();
        }
        assert_eq!(*fired.borrow(), vec![5]);
    }

    #[test]
    fn test_out_of_range_row_is_an_error() {
        let network = SharedConnectivity::new(true);
        let (controller, _) = controller(3, false, &network);
        let binding = PagedBinding::new(&controller);

        assert_eq!(
            binding.row(3),
            Err(PagingError::IndexOutOfRange { index: 3, size: 3 })
        );
    }
}
