use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::feed::FeedSource;
use crate::pipeline::Pipeline;

use super::store::SnapshotStore;

#[derive(Debug, Error)]
pub enum RefresherError {
    #[error("refresher already running")]
    AlreadyRunning,
    #[error("refresh interval must be non-zero")]
    ZeroInterval,
}

/// Longest wait between two refreshes; larger intervals are clamped.
pub const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug)]
struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

/// Periodically pulls the feed from a source into a [`SnapshotStore`].
pub struct Refresher {
    pipeline: Pipeline,
    store: SnapshotStore,
    worker: Option<WorkerHandle>,
}

impl Refresher {
    pub fn new(pipeline: Pipeline, store: SnapshotStore) -> Self {
        Self {
            pipeline,
            store,
            worker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn start<S>(&mut self, source: S, interval: Duration) -> Result<(), RefresherError>
    where
        S: FeedSource + 'static,
    {
        if self.worker.is_some() {
            return Err(RefresherError::AlreadyRunning);
        }
        if interval.is_zero() {
            return Err(RefresherError::ZeroInterval);
        }
        let interval = interval.min(MAX_REFRESH_INTERVAL);

        let pipeline = self.pipeline.clone();
        let store = self.store.clone();
        let (stop_tx, stop_rx) = oneshot::channel();

        let join = tokio::spawn(async move {
            run_refresh_loop(pipeline, store, source, interval, stop_rx).await;
        });

        self.worker = Some(WorkerHandle { stop_tx, join });
        Ok(())
    }

    pub async fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            let _ = worker.join.await;
        }
    }
}

/// Refresh once from `source`. Failures are logged and leave the store as is.
pub async fn refresh_once<S: FeedSource>(pipeline: &Pipeline, store: &SnapshotStore, source: &S) {
    let result = pipeline.process_source(source).await;
    match store.apply(result).await {
        Ok(snapshot) => log::debug!(
            "snapshot refreshed (feed timestamp {})",
            snapshot.data.timestamp
        ),
        Err(e) => log::warn!("feed refresh failed, keeping previous snapshot: {}", e),
    }
}

async fn run_refresh_loop<S: FeedSource>(
    pipeline: Pipeline,
    store: SnapshotStore,
    source: S,
    interval: Duration,
    mut stop_rx: oneshot::Receiver<()>,
) {
    loop {
        let now = Instant::now();
        let next = now
            .checked_add(interval)
            .unwrap_or_else(|| now + MAX_REFRESH_INTERVAL);
        refresh_once(&pipeline, &store, &source).await;

        let should_stop = tokio::select! {
            _ = sleep_until(next) => false,
            _ = &mut stop_rx => true,
        };
        if should_stop {
            log::info!("feed refresher stopped");
            return;
        }
    }
}
