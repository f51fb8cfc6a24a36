use crate::autograd::{Graph, NodeId};
use crate::error::GradNetError;
use crate::nn::init::Initializer;
use crate::nn::layers::layer::{Layer, LayerParam};
use crate::nn::module::Module;
use log::debug;
use rand::Rng;

/// A feed-forward network: layers applied in order, each consuming the
/// previous layer's outputs.
///
/// The output size of layer *i* always equals the input size of layer *i+1*.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    layers: Vec<Layer>,
    input_size: usize,
}

impl NeuralNetwork {
    /// Builds one randomly initialized layer per entry of `params`, threading
    /// the sizes so the chain is consistent by construction.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        input_size: usize,
        params: &[LayerParam],
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, GradNetError> {
        let mut layers = Vec::with_capacity(params.len());
        let mut size = input_size;
        for param in params {
            layers.push(Layer::new(graph, size, param, initializer, rng)?);
            size = param.output_size;
        }
        let network = NeuralNetwork { layers, input_size };
        debug!(
            "NeuralNetwork: {} layers, {} parameters",
            network.layers.len(),
            network.num_parameters()
        );
        Ok(network)
    }

    /// Assembles a network from pre-built layers.
    ///
    /// # Errors
    /// `GradNetError::LayerSizeMismatch` if a layer's input size differs from
    /// the output size of the layer before it (or from `input_size` for the
    /// first layer).
    pub fn from_layers(input_size: usize, layers: Vec<Layer>) -> Result<Self, GradNetError> {
        let mut size = input_size;
        for (index, layer) in layers.iter().enumerate() {
            if layer.input_size() != size {
                return Err(GradNetError::LayerSizeMismatch {
                    layer: index,
                    expected: layer.input_size(),
                    actual: size,
                });
            }
            size = layer.output_size();
        }
        Ok(NeuralNetwork { layers, input_size })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Size of the last layer, or the input size for a network without layers.
    pub fn output_size(&self) -> usize {
        self.layers
            .last()
            .map_or(self.input_size, |layer| layer.output_size())
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Scores of every record of a batch, in order.
    pub fn forward_batch(
        &self,
        graph: &mut Graph,
        inputs: &[Vec<NodeId>],
    ) -> Result<Vec<Vec<NodeId>>, GradNetError> {
        inputs
            .iter()
            .map(|record| self.forward(graph, record))
            .collect()
    }

    /// Evaluates the network on plain values and returns the output values.
    ///
    /// Every node created for the evaluation is dropped before returning, so
    /// repeated predictions do not grow the graph.
    pub fn predict(&self, graph: &mut Graph, input: &[f64]) -> Result<Vec<f64>, GradNetError> {
        let mark = graph.mark();
        let inputs = graph.leaves(input);
        let result = self
            .forward(graph, &inputs)
            .map(|outputs| graph.values(&outputs));
        graph.rewind(mark);
        result
    }
}

impl Module for NeuralNetwork {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, GradNetError> {
        if inputs.len() != self.input_size {
            return Err(GradNetError::DimensionMismatch {
                expected: self.input_size,
                actual: inputs.len(),
                operation: "NeuralNetwork::forward".to_string(),
            });
        }
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(graph, &activations)?;
        }
        Ok(activations)
    }

    /// Layer by layer, neuron by neuron, intercept before weights.
    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, id)| (format!("layer.{}.{}", i, name), id))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
