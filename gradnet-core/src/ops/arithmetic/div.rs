use crate::autograd::{Graph, NodeId};

impl Graph {
    /// `lhs / rhs`, composed as `lhs * rhs^-1`.
    ///
    /// Adds two nodes (a `Pow(-1)` and a `Mul`). A zero-valued `rhs` yields an
    /// infinite or `NaN` value rather than an error.
    pub fn div(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        let reciprocal = self.pow(rhs, -1.0);
        self.mul(lhs, reciprocal)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
