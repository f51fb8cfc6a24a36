use crate::autograd::{Graph, NodeId};
use crate::ops::Operation;

impl Graph {
    /// `lhs + rhs`.
    ///
    /// Backward: both operands receive the upstream gradient unchanged. With
    /// `add(a, a)`, `a` receives it twice.
    pub fn add(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        let value = self.value(lhs) + self.value(rhs);
        self.push(value, Operation::Add, vec![lhs, rhs])
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
