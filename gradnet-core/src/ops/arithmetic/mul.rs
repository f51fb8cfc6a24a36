use crate::autograd::{Graph, NodeId};
use crate::ops::Operation;

impl Graph {
    /// `lhs * rhs`.
    ///
    /// Backward: each operand receives the other operand's value times the
    /// upstream gradient.
    pub fn mul(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        let value = self.value(lhs) * self.value(rhs);
        self.push(value, Operation::Mul, vec![lhs, rhs])
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
