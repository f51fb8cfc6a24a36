use crate::autograd::{Graph, NodeId};
use crate::ops::Operation;

impl Graph {
    /// `base ^ exponent` for a fixed, non-differentiated exponent.
    ///
    /// Backward: `exponent * base^(exponent - 1)` times the upstream gradient.
    pub fn pow(&mut self, base: NodeId, exponent: f64) -> NodeId {
        let value = self.value(base).powf(exponent);
        self.push(value, Operation::Pow(exponent), vec![base])
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
