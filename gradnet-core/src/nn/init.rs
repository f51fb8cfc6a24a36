use crate::error::GradNetError;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Distribution used to draw the initial value of every parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Initializer {
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std_dev: f64 },
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
}

impl Default for Initializer {
    /// Standard normal.
    fn default() -> Self {
        Initializer::Normal {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl Initializer {
    /// Draws one value.
    ///
    /// # Errors
    /// `GradNetError::InvalidDistribution` if the parameters do not describe a
    /// valid distribution (negative or non-finite standard deviation, empty or
    /// unbounded uniform range).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, GradNetError> {
        Ok(self.sample_n(1, rng)?[0])
    }

    /// Draws `n` values in order.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, GradNetError> {
        match *self {
            Initializer::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(GradNetError::InvalidDistribution(format!(
                        "normal mean must be finite, got {}",
                        mean
                    )));
                }
                // rand_distr only rejects a non-finite std_dev
                if !(std_dev >= 0.0) {
                    return Err(GradNetError::InvalidDistribution(format!(
                        "normal std_dev must be non-negative, got {}",
                        std_dev
                    )));
                }
                let dist = Normal::new(mean, std_dev).map_err(|e| {
                    GradNetError::InvalidDistribution(format!(
                        "normal(mean={}, std_dev={}): {}",
                        mean, std_dev, e
                    ))
                })?;
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Initializer::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite()) || low >= high || !(high - low).is_finite() {
                    return Err(GradNetError::InvalidDistribution(format!(
                        "uniform range [{}, {}) is empty or unbounded",
                        low, high
                    )));
                }
                let dist = Uniform::new(low, high);
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
