//! Pagination state for lazy list rendering.
//!
//! A finite loaded sequence of items is augmented with one trailing
//! synthetic loader slot, and "load next page" requests are gated as
//! the viewport approaches the end of loaded data. The crate carries no
//! UI: the rendering engine, row presentation, and connectivity
//! detection are collaborators seen only through small interfaces.
//!
//! # Architecture
//!
//! - [`PagedList`] - immutable snapshot: items + `has_more`, virtual
//!   index space with the loader slot
//! - [`PagingController`] - request gating: prefetch window, dedup
//!   guard, manual retry, rebind
//! - [`PagedBinding`] - per-row protocol the rendering engine drives
//! - [`PagedItemProvider`] - stable keys per row, loader sentinel key
//! - [`Connectivity`] - injected network-availability signal
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use lazypage::{PagedBinding, PagedList, PagingController, Row, SharedConnectivity};
//!
//! let network = SharedConnectivity::new(true);
//! let list = Rc::new(PagedList::new(vec!["a", "b", "c"], true));
//! let controller = PagingController::new(list, Rc::new(network), |loader_index| {
//!     // kick off the fetch for the page starting at `loader_index`
//!     let _ = loader_index;
//! });
//!
//! let binding = PagedBinding::new(&controller);
//! for index in 0..binding.len() {
//!     match binding.row(index).unwrap() {
//!         Row::Item(item) => println!("{item}"),
//!         Row::Loader(affordance) => println!("{affordance:?}"),
//!     }
//! }
//! ```

pub mod binding;
pub mod connectivity;
pub mod controller;
pub mod error;
pub mod key;
pub mod load_state;
pub mod paged_list;
pub mod provider;

pub use binding::{PagedBinding, Row};
pub use connectivity::{Connectivity, SharedConnectivity};
pub use controller::{PagingController, DEFAULT_PREFETCH_THRESHOLD};
pub use error::PagingError;
pub use key::ItemKey;
pub use load_state::{FetchState, LoaderAffordance, RetryOutcome};
pub use paged_list::PagedList;
pub use provider::{LazyItemSource, PagedItemProvider};
