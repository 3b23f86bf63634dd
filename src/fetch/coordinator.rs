//! Decides, for the current `(category, page)` key, whether the cache
//! already answers it or the remote service must be called.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, error};

use crate::api::{ApiError, ImageClient, ImageRecord};
use crate::store::gallery::{GalleryIntent, GalleryState};
use crate::store::{AppIntent, Store};

/// Result of one fetch attempt, delivered back to the event loop.
///
/// Carries the key it was issued for; a completion that resolves after
/// the view moved on is stale but still valid for that key.
#[derive(Debug)]
pub struct FetchCompletion {
    pub category: String,
    pub page: u32,
    pub outcome: FetchOutcome,
}

/// What the service said for the key, reduced to cache decisions.
#[derive(Debug)]
pub enum FetchOutcome {
    /// `total > 0`: records now cached under the key.
    Results(Vec<ImageRecord>),
    /// `total <= 0`: the key is past the end of the result set. An empty
    /// page is cached so the key is a hit from now on.
    Exhausted,
    /// Transport, status, or decode failure. The key stays uncached so
    /// the next visit retries.
    Failed(ApiError),
}

/// What [`FetchCoordinator::ensure_current_page`] decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDecision {
    /// The key is cached (possibly as an empty page); no request made.
    CacheHit,
    /// A request for the key is now in flight.
    Started,
}

/// Callback invoked with each completion, from the fetch task.
pub type CompletionSink = Arc<dyn Fn(FetchCompletion) + Send + Sync>;

/// Effectful controller between the cache and the image service.
///
/// Successful responses are dispatched into the store from the fetch
/// task itself, keyed by the original `(category, page)`, so a stale
/// completion still lands in the right cache slot. UI-facing signals
/// (loading, exhausted) are derived from the [`FetchCompletion`] the
/// sink receives.
pub struct FetchCoordinator {
    client: Arc<dyn ImageClient>,
    store: Store,
    runtime: Handle,
    sink: CompletionSink,
}

impl FetchCoordinator {
    pub fn new(
        client: Arc<dyn ImageClient>,
        store: Store,
        runtime: Handle,
        sink: CompletionSink,
    ) -> Self {
        Self {
            client,
            store,
            runtime,
            sink,
        }
    }

    /// Consult the cache for the state's current key and start a request
    /// on a miss.
    ///
    /// In-flight requests are never cancelled by later calls. Two calls
    /// for the same missing key before either resolves will both fetch;
    /// the last `SetData` to apply wins, which is harmless because
    /// responses for the same key are idempotent.
    pub fn ensure_current_page(&self, gallery: &GalleryState) -> FetchDecision {
        let category = gallery.category.clone();
        let page = gallery.page;

        if gallery.cached_page(&category, page).is_some() {
            debug!(category = %category, page, "cache hit, skipping fetch");
            return FetchDecision::CacheHit;
        }

        debug!(category = %category, page, "cache miss, fetching");
        let future = self.client.search(&category, page);
        let store = self.store.clone();
        let sink = Arc::clone(&self.sink);

        self.runtime.spawn(async move {
            let outcome = match future.await {
                Ok(response) if response.total <= 0 => FetchOutcome::Exhausted,
                Ok(response) => FetchOutcome::Results(response.hits),
                Err(err) => {
                    error!(category = %category, page, error = %err, "image fetch failed");
                    FetchOutcome::Failed(err)
                }
            };

            match &outcome {
                FetchOutcome::Results(records) => {
                    store.dispatch(AppIntent::Gallery(GalleryIntent::SetData {
                        category: category.clone(),
                        page,
                        records: records.clone(),
                    }));
                }
                FetchOutcome::Exhausted => {
                    store.dispatch(AppIntent::Gallery(GalleryIntent::SetData {
                        category: category.clone(),
                        page,
                        records: Vec::new(),
                    }));
                }
                // A failed key stays a miss; the next visit retries.
                FetchOutcome::Failed(_) => {}
            }

            sink(FetchCompletion {
                category,
                page,
                outcome,
            });
        });

        FetchDecision::Started
    }
}
