//! Training loop, its configuration and post-hoc metrics.

pub mod metrics;
pub mod param;
pub mod trainer;

pub use metrics::accuracy;
pub use param::TrainingParam;
pub use trainer::{train, TrainingReport};
