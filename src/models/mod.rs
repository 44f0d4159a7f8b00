// Derived, per-render data: projection of articles onto the chart plane
pub mod distribution;
pub mod jitter;
pub mod projection;

pub use distribution::{DistributionSlice, label_distribution};
pub use jitter::{Jitter, RandomJitter};
pub use projection::{ProjectedPoint, ResultProjector};
