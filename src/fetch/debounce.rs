//! Debounced commits for free-text input.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A cancellable scheduled task for a single logical slot.
///
/// Scheduling again before the quiet period elapses aborts the pending
/// task, so only the last scheduled closure fires. Abort is best-effort
/// once the sleep has already elapsed.
pub struct Debouncer {
    runtime: Handle,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(runtime: Handle, delay: Duration) -> Self {
        Self {
            runtime,
            delay,
            pending: None,
        }
    }

    /// Schedule `commit` to run after the quiet period, cancelling any
    /// previously scheduled commit.
    pub fn schedule<F>(&mut self, commit: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            commit();
        }));
    }

    /// Abort the pending commit, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
