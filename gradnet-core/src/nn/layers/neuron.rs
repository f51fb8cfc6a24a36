use crate::autograd::{Graph, NodeId};
use crate::error::GradNetError;
use crate::nn::init::Initializer;
use crate::nn::module::Module;
use rand::Rng;

/// A single unit computing `intercept + Σ input_i * weight_i`.
///
/// The intercept and weights are leaves of the graph the neuron was created on.
/// Optimizers update them in place; the handles never change.
#[derive(Debug, Clone)]
pub struct Neuron {
    intercept: NodeId,
    weights: Vec<NodeId>,
}

impl Neuron {
    /// Creates a neuron with `input_size` weights drawn from `initializer`,
    /// weights first, then the intercept.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        input_size: usize,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, GradNetError> {
        let weight_values = initializer.sample_n(input_size, rng)?;
        let intercept_value = initializer.sample(rng)?;
        let weights = graph.leaves(&weight_values);
        let intercept = graph.leaf(intercept_value);
        Ok(Neuron { intercept, weights })
    }

    /// Creates a neuron with fixed parameter values.
    pub fn from_values(graph: &mut Graph, intercept: f64, weights: &[f64]) -> Self {
        let weights = graph.leaves(weights);
        let intercept = graph.leaf(intercept);
        Neuron { intercept, weights }
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn intercept(&self) -> NodeId {
        self.intercept
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    /// Pre-activation output node.
    pub fn linear(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, GradNetError> {
        if inputs.len() != self.weights.len() {
            return Err(GradNetError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let mut output = self.intercept;
        for (&x, &w) in inputs.iter().zip(&self.weights) {
            let product = graph.mul(x, w);
            output = graph.add(output, product);
        }
        Ok(output)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, GradNetError> {
        Ok(vec![self.linear(graph, inputs)?])
    }

    /// Intercept first, then weights in input order.
    fn parameters(&self) -> Vec<NodeId> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.push(self.intercept);
        params.extend_from_slice(&self.weights);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named = vec![("intercept".to_string(), self.intercept)];
        named.extend(
            self.weights
                .iter()
                .enumerate()
                .map(|(i, &w)| (format!("weight.{}", i), w)),
        );
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
