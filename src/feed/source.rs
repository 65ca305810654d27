use std::future::Future;
use std::path::PathBuf;

use super::error::FeedError;

/// Something that yields the feed payload as text.
///
/// Transport concerns (requests, timeouts, retries) belong to the implementor.
pub trait FeedSource: Send + Sync {
    fn fetch_text(&self) -> impl Future<Output = Result<String, FeedError>> + Send;
}

/// Reads the payload from a file that an external fetcher keeps up to date.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FeedSource for FileSource {
    async fn fetch_text(&self) -> Result<String, FeedError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// A payload already held in memory.
#[derive(Debug, Clone)]
pub struct TextSource(pub String);

impl FeedSource for TextSource {
    async fn fetch_text(&self) -> Result<String, FeedError> {
        Ok(self.0.clone())
    }
}
