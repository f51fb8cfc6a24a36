use crate::autograd::{Graph, NodeId};
use crate::ops::Operation;

impl Graph {
    /// Natural logarithm of `input`.
    ///
    /// Backward: `1 / input` times the upstream gradient. A non-positive input
    /// produces whatever `f64::ln` produces (`-inf` or `NaN`).
    pub fn log(&mut self, input: NodeId) -> NodeId {
        let value = self.value(input).ln();
        self.push(value, Operation::Log, vec![input])
    }
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
