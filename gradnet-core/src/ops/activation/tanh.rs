use crate::autograd::{Graph, NodeId};
use crate::ops::Operation;

/// Hyperbolic tangent via `f64::tanh`. Matches `(e^2x - 1) / (e^2x + 1)` for
/// ordinary inputs; for large |x| it saturates to ±1 where the quotient would
/// be `inf / inf = NaN`.
pub(crate) fn tanh(x: f64) -> f64 {
    x.tanh()
}

/// `1 - y^2` with `y = tanh(x)`.
pub(crate) fn tanh_derivative(x: f64) -> f64 {
    let y = tanh(x);
    1.0 - y * y
}

impl Graph {
    /// Hyperbolic tangent of `input`.
    pub fn tanh(&mut self, input: NodeId) -> NodeId {
        let value = tanh(self.value(input));
        self.push(value, Operation::Tanh, vec![input])
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
