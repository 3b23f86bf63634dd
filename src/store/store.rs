//! Versioned application store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::store::mvi::Reducer;
use crate::store::persist::SnapshotStore;
use crate::store::root::{AppIntent, AppState, RootReducer};

/// Owned application state with dispatch and change detection.
///
/// The state is only ever replaced wholesale through [`Store::dispatch`];
/// readers clone the snapshot. Every dispatch bumps a version counter so
/// consumers can detect change without comparing the whole tree.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<AppState>>,
    version: Arc<AtomicU64>,
    snapshots: Option<SnapshotStore>,
}

impl Store {
    /// Create a store from an initial state. When `snapshots` is given,
    /// the gallery domain is persisted after every dispatch.
    pub fn new(initial: AppState, snapshots: Option<SnapshotStore>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
            version: Arc::new(AtomicU64::new(0)),
            snapshots,
        }
    }

    /// Clone of the current state snapshot.
    pub fn state(&self) -> AppState {
        self.inner.read().clone()
    }

    /// Monotonic counter bumped on every dispatch.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Apply an intent through the root reducer, then persist the
    /// whitelisted domain. Persistence is best-effort: failures are
    /// logged and never surfaced to callers.
    pub fn dispatch(&self, intent: AppIntent) {
        let gallery = {
            let mut guard = self.inner.write();
            let next = RootReducer::reduce(guard.clone(), intent);
            *guard = next;
            guard.gallery.clone()
        };
        self.version.fetch_add(1, Ordering::Release);

        if let Some(snapshots) = &self.snapshots {
            if let Err(err) = snapshots.save(&gallery) {
                warn!(error = %err, path = %snapshots.path().display(), "failed to persist gallery snapshot");
            }
        }
    }
}
