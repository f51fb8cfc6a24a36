//! # Activation Functions
//!
//! Unary non-linearities applied by layers. Each one has a forward function `f`
//! and a derivative `g` evaluated at the *input* value; the backward rule is
//! `input.grad += g(input) * upstream`.
//!
//! - [`Graph::relu`](crate::Graph::relu): `max(0, x)`, subgradient 0 at 0.
//! - [`Graph::sigmoid`](crate::Graph::sigmoid): `1 / (1 + e^-x)`.
//! - [`Graph::tanh`](crate::Graph::tanh): hyperbolic tangent.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub(crate) use relu::relu_derivative;
pub(crate) use sigmoid::sigmoid_derivative;
pub(crate) use tanh::tanh_derivative;

use crate::autograd::{Graph, NodeId};
use std::fmt;

/// Activation applied uniformly to every neuron output of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    /// Appends this activation on top of `input`.
    pub fn apply(self, graph: &mut Graph, input: NodeId) -> NodeId {
        match self {
            Activation::Relu => graph.relu(input),
            Activation::Sigmoid => graph.sigmoid(input),
            Activation::Tanh => graph.tanh(input),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Relu => write!(f, "ReLU"),
            Activation::Sigmoid => write!(f, "Sigmoid"),
            Activation::Tanh => write!(f, "Tanh"),
        }
    }
}
