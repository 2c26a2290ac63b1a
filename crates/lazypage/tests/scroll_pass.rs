//! End-to-end scroll simulation against the paging contract.
//!
//! Plays the role of the host rendering engine: renders a moving
//! viewport window pass by pass, completes fetches by rebinding new
//! snapshots, and drops connectivity mid-scroll.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use lazypage::{
    LoaderAffordance, PagedBinding, PagedList, PagingController, RetryOutcome, Row,
    SharedConnectivity,
};

fn page(n: usize, has_more: bool) -> Rc<PagedList<usize>> {
    Rc::new(PagedList::new((0..n).collect(), has_more))
}

/// Renders one pass over the visible window, calling `row` for every
/// index exactly as the engine contract requires.
fn render_pass(controller: &PagingController<usize>, window: Range<usize>) -> Vec<String> {
    let binding = PagedBinding::new(controller);
    window
        .map(|index| match binding.row(index).unwrap() {
            Row::Item(item) => format!("item:{item}"),
            Row::Loader(LoaderAffordance::Spinner) => "loader:spinner".to_string(),
            Row::Loader(LoaderAffordance::Retry) => "loader:retry".to_string(),
        })
        .collect()
}

#[test]
fn scrolling_to_the_end_pages_through_and_terminates() {
    let network = SharedConnectivity::new(true);
    let requested = Rc::new(RefCell::new(Vec::new()));
    let probe = Rc::clone(&requested);
    let mut controller = PagingController::with_threshold(
        page(20, true),
        Rc::new(network),
        3,
        move |loader_index| probe.borrow_mut().push(loader_index),
    );

    // Early passes stay outside the trailing window: nothing fires.
    render_pass(&controller, 0..5);
    render_pass(&controller, 8..13);
    assert!(requested.borrow().is_empty());

    // The window reaches index 17 (17 + 3 >= loader at 20): one fetch,
    // and repeating the pass does not re-fire.
    let rows = render_pass(&controller, 16..21);
    assert_eq!(rows.last().unwrap(), "loader:spinner");
    render_pass(&controller, 16..21);
    assert_eq!(*requested.borrow(), vec![20]);

    // Page arrives: host rebinds, guard re-arms, next window fires once.
    controller.rebind(page(40, true));
    render_pass(&controller, 36..41);
    render_pass(&controller, 36..41);
    assert_eq!(*requested.borrow(), vec![20, 40]);

    // Final page: terminal snapshot, no loader row, never fires again.
    controller.rebind(page(60, false));
    let rows = render_pass(&controller, 55..60);
    assert_eq!(rows, vec!["item:55", "item:56", "item:57", "item:58", "item:59"]);
    assert_eq!(*requested.borrow(), vec![20, 40]);
}

#[test]
fn initial_empty_snapshot_fetches_on_first_render() {
    let network = SharedConnectivity::new(true);
    let requested = Rc::new(RefCell::new(Vec::new()));
    let probe = Rc::clone(&requested);
    let controller = PagingController::new(
        Rc::new(PagedList::<usize>::initial()),
        Rc::new(network),
        move |loader_index| probe.borrow_mut().push(loader_index),
    );

    // The only virtual row is the loader slot itself.
    let rows = render_pass(&controller, 0..1);
    assert_eq!(rows, vec!["loader:spinner"]);
    assert_eq!(*requested.borrow(), vec![0]);
}

#[test]
fn connectivity_loss_blocks_until_manual_retry() {
    let network = SharedConnectivity::new(true);
    let requested = Rc::new(RefCell::new(Vec::new()));
    let probe = Rc::clone(&requested);
    let mut controller = PagingController::with_threshold(
        page(10, true),
        Rc::new(network.clone()),
        2,
        move |loader_index| probe.borrow_mut().push(loader_index),
    );

    network.set_connected(false);

    // Inside the window, but offline: no fetch, loader renders retry.
    let rows = render_pass(&controller, 8..11);
    assert_eq!(rows.last().unwrap(), "loader:retry");
    assert!(requested.borrow().is_empty());

    // Retry tap while still offline: toast signal, still nothing fired.
    assert_eq!(
        PagedBinding::new(&controller).retry(),
        RetryOutcome::Offline
    );
    assert!(requested.borrow().is_empty());

    // Connectivity returns; the retry tap goes through.
    network.set_connected(true);
    assert_eq!(
        PagedBinding::new(&controller).retry(),
        RetryOutcome::Dispatched
    );
    assert_eq!(*requested.borrow(), vec![10]);

    // The fetch completes and pagination resumes normally.
    controller.rebind(page(20, true));
    render_pass(&controller, 17..21);
    assert_eq!(*requested.borrow(), vec![10, 20]);
}

#[test]
fn retry_after_automatic_request_redispatches() {
    let network = SharedConnectivity::new(true);
    let requested = Rc::new(RefCell::new(Vec::new()));
    let probe = Rc::clone(&requested);
    let controller = PagingController::with_threshold(
        page(10, true),
        Rc::new(network),
        2,
        move |loader_index| probe.borrow_mut().push(loader_index),
    );

    // Automatic trigger fires; the host's fetch then stalls, and the
    // user taps retry on the still-spinning loader row.
    render_pass(&controller, 8..11);
    assert_eq!(PagedBinding::new(&controller).retry(), RetryOutcome::Dispatched);
    assert_eq!(*requested.borrow(), vec![10, 10]);
}
