use crate::autograd::{Graph, NodeId};
use crate::optim::optimizer_trait::Optimizer;

/// Plain stochastic gradient descent: `value -= learning_rate * grad`.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    learning_rate: f64,
}

impl Sgd {
    /// # Arguments
    ///
    /// * `params`: Parameter handles (leaves) to optimize.
    /// * `learning_rate`: Step size.
    pub fn new(params: impl IntoIterator<Item = NodeId>, learning_rate: f64) -> Self {
        Sgd {
            params: params.into_iter().collect(),
            learning_rate,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) {
        for &param in &self.params {
            let updated = graph.value(param) - self.learning_rate * graph.grad(param);
            graph.set_value(param, updated);
        }
    }

    fn params(&self) -> &[NodeId] {
        &self.params
    }
}
