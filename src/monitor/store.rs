use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::feed::FeedError;
use crate::pipeline::DsnSnapshot;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(flatten)]
    pub data: DsnSnapshot,
    pub received_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, ToSchema)]
pub struct RefreshCounters {
    pub refreshes: u64,
    pub failures: u64,
}

#[derive(Debug)]
struct Shared {
    snapshot: Snapshot,
    counters: RefreshCounters,
}

/// Latest normalized view, shared between the refresher and readers.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    shared: Arc<RwLock<Shared>>,
}

impl SnapshotStore {
    pub fn new(initial: DsnSnapshot) -> Self {
        Self {
            shared: Arc::new(RwLock::new(Shared {
                snapshot: Snapshot {
                    data: initial,
                    received_at: None,
                },
                counters: RefreshCounters::default(),
            })),
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.shared.read().await.snapshot.clone()
    }

    pub async fn counters(&self) -> RefreshCounters {
        self.shared.read().await.counters
    }

    /// Install the outcome of one refresh. A failed refresh leaves the
    /// previous snapshot in place and hands the error back.
    pub async fn apply(
        &self,
        result: Result<DsnSnapshot, FeedError>,
    ) -> Result<Snapshot, FeedError> {
        let mut locked = self.shared.write().await;
        match result {
            Ok(data) => {
                locked.counters.refreshes += 1;
                locked.snapshot = Snapshot {
                    data,
                    received_at: Some(Utc::now()),
                };
                Ok(locked.snapshot.clone())
            }
            Err(e) => {
                locked.counters.failures += 1;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::LogDiagnostics;
    use crate::dish::StatusOrder;
    use crate::pipeline::Pipeline;
    use crate::reference::ReferenceData;

    fn pipeline() -> Pipeline {
        Pipeline::new(
            Arc::new(ReferenceData::builtin()),
            Arc::new(LogDiagnostics::new()),
            StatusOrder::OfflineFirst,
        )
    }

    #[tokio::test]
    async fn starts_from_initial_snapshot() {
        let pipeline = pipeline();
        let store = SnapshotStore::new(pipeline.initial_snapshot());

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.data.dishes.len(), 13);
        assert!(snapshot.received_at.is_none());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let pipeline = pipeline();
        let store = SnapshotStore::new(pipeline.initial_snapshot());

        let good = pipeline.process(
            r#"<dsn><dish name="DSS43" elevationAngle="33.3"/><timestamp>1</timestamp></dsn>"#,
        );
        store.apply(good).await.unwrap();

        let bad = pipeline.process("<dsn><dish></dsn>");
        assert!(store.apply(bad).await.is_err());

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.data.timestamp, "1");
        assert!(snapshot.received_at.is_some());

        let counters = store.counters().await;
        assert_eq!(counters.refreshes, 1);
        assert_eq!(counters.failures, 1);
    }
}
