mod normalize;
mod rank;
mod reconcile;
mod types;

pub use normalize::normalize_dish;
pub use rank::{rank, StatusOrder};
pub use reconcile::{reconcile, roster};
pub use types::{
    AntennaRecord, DishStatus, Metadata, SignalDisplay, SignalEntry, SignalType, TargetDisplay,
    TargetEntry,
};
