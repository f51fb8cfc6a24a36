// gradnet-data/src/samplers/traits.rs

use gradnet_core::GradNetError;
use rand::Rng;
use std::fmt::Debug;

/// Decides which records of a dataset go into a batch, and in which order.
///
/// Randomness comes from the caller's generator, so a fixed seed gives a
/// reproducible batch.
pub trait Sampler: Debug {
    /// Returns the selected indices.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    /// * `rng` - Source of randomness (ignored by deterministic samplers).
    fn indices<R: Rng + ?Sized>(&self, dataset_len: usize, rng: &mut R) -> Result<Vec<usize>, GradNetError>;

    /// Number of indices [`Sampler::indices`] yields for a dataset of `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}
