pub mod error;
pub mod feed;
pub mod snapshot;
pub mod spacecraft;
