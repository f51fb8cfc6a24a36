use crate::record::Record;
use gradnet_core::GradNetError;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Two interleaving half circles in the plane.
///
/// The outer moon (`label 0`) is `(cos t, sin t)` and the inner moon
/// (`label 1`) is `(1 - cos t, 0.5 - sin t)`, with `t` evenly spaced over
/// `[0, π]`. The outer moon gets `n_samples / 2` points, the inner one the
/// rest. Gaussian noise with standard deviation `noise` is added to both
/// coordinates, then the records are shuffled.
///
/// # Errors
/// `GradNetError::InvalidDistribution` if `noise` is negative or not finite.
pub fn make_moons<R: Rng + ?Sized>(n_samples: usize, noise: f64, rng: &mut R) -> Result<Vec<Record>, GradNetError> {
    if !noise.is_finite() || noise < 0.0 {
        return Err(GradNetError::InvalidDistribution(format!(
            "noise must be finite and non-negative, got {}",
            noise
        )));
    }
    let jitter = Normal::new(0.0, noise)
        .map_err(|e| GradNetError::InvalidDistribution(format!("noise {}: {}", noise, e)))?;

    let n_outer = n_samples / 2;
    let n_inner = n_samples - n_outer;
    let mut records = Vec::with_capacity(n_samples);

    for t in linspace(0.0, PI, n_outer) {
        records.push(Record::new(vec![t.cos(), t.sin()], vec![0.0]));
    }
    for t in linspace(0.0, PI, n_inner) {
        records.push(Record::new(vec![1.0 - t.cos(), 0.5 - t.sin()], vec![1.0]));
    }

    if noise > 0.0 {
        for record in &mut records {
            for x in &mut record.input {
                *x += jitter.sample(rng);
            }
        }
    }
    records.shuffle(rng);
    Ok(records)
}

fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| start + step * i as f64)
}

#[cfg(test)]
#[path = "synthetic_test.rs"]
mod tests;
