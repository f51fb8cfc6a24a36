// gradnet-data/src/samplers/sequential_sampler.rs

use super::traits::Sampler;
use gradnet_core::GradNetError;
use rand::Rng;

/// Yields `0..dataset_len` in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn indices<R: Rng + ?Sized>(&self, dataset_len: usize, _rng: &mut R) -> Result<Vec<usize>, GradNetError> {
        Ok((0..dataset_len).collect())
    }

    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
