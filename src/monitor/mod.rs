mod refresher;
mod store;

pub use refresher::{refresh_once, Refresher, RefresherError, MAX_REFRESH_INTERVAL};
pub use store::{RefreshCounters, Snapshot, SnapshotStore};
