use crate::autograd::{Graph, NodeId};

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step, updating every parameter's value
    /// in `graph` from its current gradient.
    fn step(&mut self, graph: &mut Graph);

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate across backward passes, so this is called before
    /// each one in a training loop.
    fn zero_grad(&self, graph: &mut Graph) {
        graph.zero_grad(self.params());
    }

    /// Handles of the parameters this optimizer updates.
    fn params(&self) -> &[NodeId];
}
