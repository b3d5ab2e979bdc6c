use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Runs only the last of a burst of scheduled jobs
///
/// Each schedule gets its own cancel token; scheduling again cancels the
/// previous job if its quiet period has not elapsed yet. A job that already
/// started is left alone.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<oneshot::Sender<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending job and run `job` once the quiet period passes
    pub fn schedule<F>(&self, job: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        if let Some(previous) = self.pending().replace(cancel_tx) {
            let _ = previous.send(());
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => job.await,
                _ = cancel_rx => {}
            }
        })
    }

    /// Cancel the pending job, if any
    pub fn cancel(&self) {
        if let Some(pending) = self.pending().take() {
            let _ = pending.send(());
        }
    }

    fn pending(&self) -> MutexGuard<'_, Option<oneshot::Sender<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
