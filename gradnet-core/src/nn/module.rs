use crate::autograd::{Graph, NodeId};
use crate::error::GradNetError;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module does not own its parameters' values: they are leaf nodes of the
/// [`Graph`] the module was built on, and the module keeps their handles.
/// Every method taking a graph must be given that same graph.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, appending the computation to `graph`.
    ///
    /// # Arguments
    /// * `graph`: The graph holding this module's parameters.
    /// * `inputs`: Handles of the input nodes, one per input feature.
    ///
    /// # Returns
    /// The output nodes, or a `GradNetError::DimensionMismatch` if `inputs`
    /// does not have the expected length.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, GradNetError>;

    /// Returns all learnable parameters of the module, including those of sub-modules.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. "layer.0.neuron.2.weight.1").
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to `0.0`.
    fn zero_grad(&self, graph: &mut Graph) {
        graph.zero_grad(&self.parameters());
    }
}
