use crate::autograd::{Graph, NodeId};
use crate::ops::Operation;

impl Graph {
    /// `e^input`.
    ///
    /// Backward: `exp(input)` times the upstream gradient.
    pub fn exp(&mut self, input: NodeId) -> NodeId {
        let value = self.value(input).exp();
        self.push(value, Operation::Exp, vec![input])
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
