use crate::autograd::{Graph, NodeId};
use crate::ops::Operation;

pub(crate) fn relu(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

/// 1 for positive inputs, 0 otherwise (including exactly 0).
pub(crate) fn relu_derivative(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

impl Graph {
    /// Rectified linear unit: `max(0, input)`.
    pub fn relu(&mut self, input: NodeId) -> NodeId {
        let value = relu(self.value(input));
        self.push(value, Operation::Relu, vec![input])
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
