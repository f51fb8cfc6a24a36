use thiserror::Error;

/// Custom error type for the gradnet crates.
///
/// Numeric trouble (a `log` of zero, a division by a zero-valued node) is not an
/// error: it flows through the graph as `NaN`/`inf` values.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum GradNetError {
    #[error("Dimension mismatch: expected {expected}, got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Layer {layer} expects {expected} inputs but the previous layer produces {actual}")]
    LayerSizeMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Batch size mismatch: {inputs} input records but {labels} label records")]
    BatchSizeMismatch { inputs: usize, labels: usize },

    #[error("Operation {operation} needs at least one record")]
    EmptyBatch { operation: String },

    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Record has no label column")]
    EmptyRecord,

    #[error("Cannot draw {requested} samples without replacement from {available} records")]
    SampleSizeTooLarge { requested: usize, available: usize },
}
