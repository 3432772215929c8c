pub mod classifier;
pub mod group;

pub use classifier::classify;
pub use group::{aggregate, aggregate_latest};
