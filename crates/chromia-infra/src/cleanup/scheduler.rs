use chromia_storage::Storage;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Removes temporary uploads a fixed delay after they were written.
///
/// Each scheduled key becomes one tracked task that sleeps for the delay and then
/// makes a single delete attempt. A scheduled deletion is never aborted: on
/// [`DeletionScheduler::shutdown`] every pending task skips the rest of its wait
/// and deletes right away. Failures are logged and dropped, never retried.
#[derive(Clone)]
pub struct DeletionScheduler {
    storage: Arc<dyn Storage>,
    delay: Duration,
    tracker: TaskTracker,
    shutdown: CancellationToken,
}

impl DeletionScheduler {
    pub fn new(storage: Arc<dyn Storage>, delay: Duration) -> Self {
        Self {
            storage,
            delay,
            tracker: TaskTracker::new(),
            shutdown: CancellationToken::new(),
        }
    }

    /// Schedule deletion of `storage_key`. Returns immediately.
    pub fn schedule(&self, storage_key: impl Into<String>) {
        let storage = self.storage.clone();
        let shutdown = self.shutdown.clone();
        let delay = self.delay;
        let storage_key = storage_key.into();

        tracing::debug!(
            key = %storage_key,
            delay_secs = delay.as_secs_f64(),
            "Scheduled upload deletion"
        );

        self.tracker.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown.cancelled() => {
                    tracing::debug!(key = %storage_key, "Shutting down, deleting upload early");
                }
            }

            Self::delete(storage.as_ref(), &storage_key).await;
        });
    }

    /// Number of deletions that have not completed yet
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Flush every pending deletion and wait for all of them to finish.
    pub async fn shutdown(&self) {
        let pending = self.pending();
        tracing::info!(pending, "Flushing scheduled upload deletions");

        self.shutdown.cancel();
        self.tracker.close();
        self.tracker.wait().await;

        tracing::info!("Upload deletions flushed");
    }

    #[tracing::instrument(skip(storage), fields(cleanup.operation = "delete_upload"))]
    async fn delete(storage: &dyn Storage, storage_key: &str) {
        match storage.delete(storage_key).await {
            Ok(()) => {
                tracing::debug!(key = %storage_key, "Temporary upload removed");
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    key = %storage_key,
                    "Failed to remove temporary upload"
                );
            }
        }
    }
}
