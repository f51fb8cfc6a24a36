use crate::autograd::{Graph, NodeId};
use crate::error::GradNetError;
use crate::nn::init::Initializer;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::ops::Activation;
use rand::Rng;

/// Shape of one layer: number of neurons and optional activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerParam {
    pub output_size: usize,
    pub activation: Option<Activation>,
}

impl LayerParam {
    pub fn new(output_size: usize, activation: Option<Activation>) -> Self {
        LayerParam {
            output_size,
            activation,
        }
    }
}

/// Neurons sharing the same input, with one activation applied to every output.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    activation: Option<Activation>,
    input_size: usize,
}

impl Layer {
    /// Creates `param.output_size` randomly initialized neurons of `input_size` inputs each.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        input_size: usize,
        param: &LayerParam,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, GradNetError> {
        let neurons = (0..param.output_size)
            .map(|_| Neuron::new(graph, input_size, initializer, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer {
            neurons,
            activation: param.activation,
            input_size,
        })
    }

    /// Assembles a layer from existing neurons, which must all take `input_size` inputs.
    pub fn from_neurons(
        input_size: usize,
        neurons: Vec<Neuron>,
        activation: Option<Activation>,
    ) -> Result<Self, GradNetError> {
        if let Some(neuron) = neurons.iter().find(|n| n.input_size() != input_size) {
            return Err(GradNetError::DimensionMismatch {
                expected: input_size,
                actual: neuron.input_size(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer {
            neurons,
            activation,
            input_size,
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.neurons.len()
    }

    pub fn activation(&self) -> Option<Activation> {
        self.activation
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, GradNetError> {
        if inputs.len() != self.input_size {
            return Err(GradNetError::DimensionMismatch {
                expected: self.input_size,
                actual: inputs.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| {
                let output = neuron.linear(graph, inputs)?;
                Ok(match self.activation {
                    Some(activation) => activation.apply(graph, output),
                    None => output,
                })
            })
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, id)| (format!("neuron.{}.{}", i, name), id))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
