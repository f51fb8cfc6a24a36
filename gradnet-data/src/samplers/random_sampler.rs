// gradnet-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use gradnet_core::GradNetError;
use rand::seq::SliceRandom;
use rand::Rng;

/// A sampler that randomly samples indices from a dataset.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
        }
    }
}

impl Sampler for RandomSampler {
    /// Without replacement: the first `num_samples` entries of a random
    /// permutation of `0..dataset_len`.
    ///
    /// # Errors
    /// `GradNetError::SampleSizeTooLarge` when sampling without replacement
    /// and `num_samples > dataset_len`.
    fn indices<R: Rng + ?Sized>(&self, dataset_len: usize, rng: &mut R) -> Result<Vec<usize>, GradNetError> {
        let num_samples = self.len(dataset_len);
        if dataset_len == 0 && num_samples == 0 {
            return Ok(Vec::new());
        }

        if self.replacement {
            if dataset_len == 0 {
                return Err(GradNetError::SampleSizeTooLarge {
                    requested: num_samples,
                    available: 0,
                });
            }
            Ok((0..num_samples).map(|_| rng.gen_range(0..dataset_len)).collect())
        } else {
            if num_samples > dataset_len {
                return Err(GradNetError::SampleSizeTooLarge {
                    requested: num_samples,
                    available: dataset_len,
                });
            }
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(rng);
            indices.truncate(num_samples);
            Ok(indices)
        }
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
