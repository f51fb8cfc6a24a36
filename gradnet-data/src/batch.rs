use crate::datasets::Dataset;
use crate::record::Record;
use crate::samplers::Sampler;
use gradnet_core::GradNetError;
use log::debug;
use rand::Rng;

/// Inputs and labels of several records, in the shape [`gradnet_core::train`] takes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

impl Batch {
    /// Collects the records at `indices`, in that order.
    pub fn from_indices<D>(dataset: &D, indices: &[usize]) -> Result<Self, GradNetError>
    where
        D: Dataset<Item = Record> + ?Sized,
    {
        let mut batch = Batch {
            inputs: Vec::with_capacity(indices.len()),
            labels: Vec::with_capacity(indices.len()),
        };
        for &index in indices {
            let record = dataset.get(index)?;
            batch.inputs.push(record.input);
            batch.labels.push(record.label);
        }
        Ok(batch)
    }

    /// Draws indices with `sampler` and collects the corresponding records.
    pub fn sample<D, S, R>(dataset: &D, sampler: &S, rng: &mut R) -> Result<Self, GradNetError>
    where
        D: Dataset<Item = Record> + ?Sized,
        S: Sampler,
        R: Rng + ?Sized,
    {
        let indices = sampler.indices(dataset.len(), rng)?;
        debug!("Batch: {} of {} records", indices.len(), dataset.len());
        Self::from_indices(dataset, &indices)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
