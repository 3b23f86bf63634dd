mod common;

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use common::{records, MockImageClient};
use pixgrid::fetch::{
    CompletionSink, FetchCompletion, FetchCoordinator, FetchDecision, FetchOutcome,
};
use pixgrid::store::gallery::GalleryIntent;
use pixgrid::store::{AppIntent, AppState, Store};

fn harness(client: Arc<MockImageClient>) -> (FetchCoordinator, Store, Receiver<FetchCompletion>) {
    let store = Store::new(AppState::default(), None);
    let (tx, rx) = mpsc::channel();
    let sink: CompletionSink = Arc::new(move |completion| {
        let _ = tx.send(completion);
    });
    let coordinator = FetchCoordinator::new(
        client,
        store.clone(),
        tokio::runtime::Handle::current(),
        sink,
    );
    (coordinator, store, rx)
}

fn recv(rx: &Receiver<FetchCompletion>) -> FetchCompletion {
    rx.recv_timeout(Duration::from_secs(2))
        .expect("fetch completion")
}

#[tokio::test(flavor = "multi_thread")]
async fn full_page_is_fetched_and_cached() {
    let client = Arc::new(MockImageClient::new());
    client.queue_ok(20, records(9));
    let (coordinator, store, rx) = harness(Arc::clone(&client));

    let decision = coordinator.ensure_current_page(&store.state().gallery);
    assert_eq!(decision, FetchDecision::Started);

    let completion = recv(&rx);
    assert_eq!(completion.category, "sport");
    assert_eq!(completion.page, 1);
    assert!(matches!(completion.outcome, FetchOutcome::Results(ref hits) if hits.len() == 9));

    let gallery = store.state().gallery;
    assert_eq!(gallery.cached_page("sport", 1).map(<[_]>::len), Some(9));
    assert_eq!(client.calls(), vec![("sport".to_string(), 1)]);
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_total_caches_an_empty_page() {
    let client = Arc::new(MockImageClient::new());
    client.queue_ok(0, Vec::new());
    let (coordinator, store, rx) = harness(Arc::clone(&client));
    store.dispatch(AppIntent::Gallery(GalleryIntent::SetPage(3)));

    let decision = coordinator.ensure_current_page(&store.state().gallery);
    assert_eq!(decision, FetchDecision::Started);

    let completion = recv(&rx);
    assert!(matches!(completion.outcome, FetchOutcome::Exhausted));

    // The key is now a remembered miss; the next visit is a cache hit.
    let gallery = store.state().gallery;
    assert_eq!(gallery.cached_page("sport", 3), Some(&[][..]));
    assert_eq!(
        coordinator.ensure_current_page(&gallery),
        FetchDecision::CacheHit
    );
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn failure_leaves_the_key_uncached_for_retry() {
    let client = Arc::new(MockImageClient::new());
    client.queue_err(500);
    let (coordinator, store, rx) = harness(Arc::clone(&client));

    let decision = coordinator.ensure_current_page(&store.state().gallery);
    assert_eq!(decision, FetchDecision::Started);

    let completion = recv(&rx);
    assert!(matches!(completion.outcome, FetchOutcome::Failed(_)));
    assert!(store.state().gallery.cached_page("sport", 1).is_none());

    // The same key fetches again on the next visit.
    client.queue_ok(20, records(9));
    let decision = coordinator.ensure_current_page(&store.state().gallery);
    assert_eq!(decision, FetchDecision::Started);
    let completion = recv(&rx);
    assert!(matches!(completion.outcome, FetchOutcome::Results(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn cache_hit_issues_no_request() {
    let client = Arc::new(MockImageClient::new());
    let (coordinator, store, _rx) = harness(Arc::clone(&client));
    store.dispatch(AppIntent::Gallery(GalleryIntent::SetData {
        category: "sport".to_string(),
        page: 1,
        records: Vec::new(),
    }));

    let decision = coordinator.ensure_current_page(&store.state().gallery);
    assert_eq!(decision, FetchDecision::CacheHit);
    assert!(client.calls().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn stale_completion_still_lands_in_its_original_key() {
    let client = Arc::new(MockImageClient::new());
    client.queue_ok(20, records(9));
    let (coordinator, store, rx) = harness(Arc::clone(&client));

    coordinator.ensure_current_page(&store.state().gallery);
    // The view moves on while the request is in flight.
    store.dispatch(AppIntent::Gallery(GalleryIntent::SetCategory(
        "cats".to_string(),
    )));

    let completion = recv(&rx);
    assert_eq!(completion.category, "sport");

    let gallery = store.state().gallery;
    assert_eq!(gallery.cached_page("sport", 1).map(<[_]>::len), Some(9));
    assert!(gallery.cached_page("cats", 1).is_none());
}
