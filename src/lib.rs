pub mod diagnostics;
pub mod dish;
pub mod feed;
pub mod monitor;
pub mod pipeline;
pub mod reference;
pub mod units;
pub mod web;

pub use pipeline::{DsnSnapshot, Pipeline};
