use crate::autograd::{Graph, NodeId};
use crate::ops::Operation;

impl Graph {
    /// `lhs - rhs`.
    ///
    /// Backward: `lhs` receives the upstream gradient, `rhs` its negation.
    pub fn sub(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        let value = self.value(lhs) - self.value(rhs);
        self.push(value, Operation::Sub, vec![lhs, rhs])
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
