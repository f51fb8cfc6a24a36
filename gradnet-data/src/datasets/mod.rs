pub mod record_dataset;
pub mod traits;

pub use record_dataset::RecordDataset;
pub use traits::Dataset;
