//! Labeled records, index samplers and batch assembly feeding
//! [`gradnet_core::train`].

pub mod batch;
pub mod datasets;
pub mod record;
pub mod samplers;
pub mod synthetic;

// Re-export main components
pub use batch::Batch;
pub use datasets::{Dataset, RecordDataset};
pub use record::Record;
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use synthetic::make_moons;
