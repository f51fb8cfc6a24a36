use crate::autograd::{Graph, NodeId};
use crate::ops::Operation;

pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// `y * (1 - y)` with `y = sigmoid(x)`.
pub(crate) fn sigmoid_derivative(x: f64) -> f64 {
    let y = sigmoid(x);
    y * (1.0 - y)
}

impl Graph {
    /// Logistic sigmoid: `1 / (1 + e^-input)`.
    pub fn sigmoid(&mut self, input: NodeId) -> NodeId {
        let value = sigmoid(self.value(input));
        self.push(value, Operation::Sigmoid, vec![input])
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
