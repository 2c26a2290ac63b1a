//! Feed demo - scripted scroll through a paged feed.
//!
//! Plays the host side of the pagination contract in the terminal: a
//! fake backend serves pages of stories, a viewport window slides down
//! the list, connectivity drops mid-scroll, and a retry tap resumes
//! paging once it returns.

use std::cell::Cell;
use std::rc::Rc;

use lazypage::{
    LoaderAffordance, PagedBinding, PagedList, PagingController, RetryOutcome, Row,
    SharedConnectivity,
};

const PAGE_SIZE: usize = 10;
const BACKEND_TOTAL: usize = 34;
const VIEWPORT_ROWS: usize = 6;
const PREFETCH_THRESHOLD: usize = 3;

/// Fake backend: returns the next page after `offset` and whether more
/// stories remain.
fn fetch_page(offset: usize) -> (Vec<String>, bool) {
    let end = (offset + PAGE_SIZE).min(BACKEND_TOTAL);
    let page = (offset..end).map(|i| format!("story #{i}")).collect();
    (page, end < BACKEND_TOTAL)
}

struct FeedHost {
    loaded: Vec<String>,
    controller: PagingController<String>,
    network: SharedConnectivity,
    /// Loader index of a dispatched fetch the backend has not answered
    /// yet. The controller itself never tracks this; fetch disposition
    /// is the host's business.
    in_flight: Rc<Cell<Option<usize>>>,
}

impl FeedHost {
    fn new() -> Self {
        let network = SharedConnectivity::new(true);
        let in_flight = Rc::new(Cell::new(None));
        let request_probe = Rc::clone(&in_flight);
        let controller = PagingController::with_threshold(
            Rc::new(PagedList::initial()),
            Rc::new(network.clone()),
            PREFETCH_THRESHOLD,
            move |loader_index| {
                println!("    -> load-more requested at loader slot {loader_index}");
                request_probe.set(Some(loader_index));
            },
        );
        Self {
            loaded: Vec::new(),
            controller,
            network,
            in_flight,
        }
    }

    /// One render pass over the visible window, exactly as a lazy list
    /// engine would drive it: every visible index goes through `row`.
    fn render(&self, first_visible: usize) {
        let binding = PagedBinding::new(&self.controller);
        let end = (first_visible + VIEWPORT_ROWS).min(binding.len());
        println!("  viewport rows {first_visible}..{end}:");
        for index in first_visible..end {
            match binding.row(index).expect("render path uses valid indices") {
                Row::Item(item) => println!("    [{index}] {item}"),
                Row::Loader(LoaderAffordance::Spinner) => println!("    [{index}] (loading...)"),
                Row::Loader(LoaderAffordance::Retry) => println!("    [{index}] (offline - tap to retry)"),
            }
        }
    }

    /// Completes an outstanding fetch, if any, by appending the next
    /// page and rebinding the controller to the new snapshot.
    fn settle_fetch(&mut self) {
        let Some(offset) = self.in_flight.take() else {
            return;
        };
        let (page, has_more) = fetch_page(offset);
        println!("    <- page of {} arrived (has_more = {has_more})", page.len());
        self.loaded.extend(page);
        self.controller
            .rebind(Rc::new(PagedList::new(self.loaded.clone(), has_more)));
    }

    fn tap_retry(&self) {
        match PagedBinding::new(&self.controller).retry() {
            RetryOutcome::Dispatched => println!("    retry tapped: fetch dispatched"),
            RetryOutcome::Offline => println!("    retry tapped: still no connection (toast)"),
            RetryOutcome::Exhausted => println!("    retry tapped: nothing left to load"),
        }
    }
}

fn main() {
    let mut host = FeedHost::new();

    println!("frame 0: cold start, nothing loaded yet");
    host.render(0);
    host.settle_fetch();

    let mut first_visible = 0;
    for frame in 1..=4 {
        println!("frame {frame}: scrolled to row {first_visible}");
        host.render(first_visible);
        host.settle_fetch();
        first_visible += 4;
    }

    println!("frame 5: connection drops while the loader row is visible");
    host.network.set_connected(false);
    let near_end = host.controller.list().len().saturating_sub(VIEWPORT_ROWS);
    host.render(near_end);
    host.tap_retry();

    println!("frame 6: connection is back, user taps retry");
    host.network.set_connected(true);
    host.tap_retry();
    host.settle_fetch();

    println!("frame 7: scrolled to the bottom of a finished feed");
    let last_window = host.controller.list().len().saturating_sub(VIEWPORT_ROWS);
    host.render(last_window);
    host.tap_retry();
}
