use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed markup: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("unexpected feed shape: {0}")]
    Shape(#[from] serde_json::Error),
    #[error("expected root element 'dsn', found '{0}'")]
    UnexpectedRoot(String),
    #[error("feed read error: {0}")]
    Io(#[from] std::io::Error),
}
