mod error;
mod model;
mod source;
pub mod tree;

pub use error::FeedError;
pub use model::{
    OneOrMany, RawDish, RawFeed, RawSignal, RawStation, RawTarget, Station, FEED_ROOT,
};
pub use source::{FeedSource, FileSource, TextSource};
