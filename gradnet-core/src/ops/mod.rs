//! # Scalar Operations Module (`ops`)
//!
//! Every operation is a method on [`Graph`](crate::Graph) that
//!
//! 1. computes the forward value from its operands,
//! 2. appends a new node tagged with an [`Operation`] and wired to the operands,
//! 3. returns the handle of that node.
//!
//! Operand values are never modified. The backward rule of each tag lives in
//! [`Operation::partials`], a single dispatch used by the backward engine.
//!
//! ## Submodules
//!
//! - [`arithmetic`]: `add`, `sub`, `mul`, `div`, `pow`.
//! - [`math_elem`]: `log`, `exp`.
//! - [`activation`]: `relu`, `sigmoid`, `tanh` and the [`Activation`] tag.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::Activation;

use std::fmt;

/// Tag identifying which propagation rule applies to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Input or parameter: no children, no rule.
    Leaf,
    Add,
    Mul,
    Sub,
    /// Power with a fixed exponent. Unary: the exponent is not a node.
    Pow(f64),
    Log,
    Exp,
    Relu,
    Sigmoid,
    Tanh,
}

impl Operation {
    pub fn is_leaf(self) -> bool {
        matches!(self, Operation::Leaf)
    }

    /// Number of children a node with this tag has.
    pub fn arity(self) -> usize {
        match self {
            Operation::Leaf => 0,
            Operation::Add | Operation::Mul | Operation::Sub => 2,
            Operation::Pow(_)
            | Operation::Log
            | Operation::Exp
            | Operation::Relu
            | Operation::Sigmoid
            | Operation::Tanh => 1,
        }
    }

    /// Local partial derivatives of the node with respect to each child slot,
    /// given the children's forward values. `rhs` is ignored by unary tags and
    /// the second entry is `0.0` for them.
    ///
    /// The chain rule is applied by the caller: `child.grad += partial * node.grad`.
    pub fn partials(self, lhs: f64, rhs: f64) -> [f64; 2] {
        match self {
            Operation::Leaf => [0.0, 0.0],
            Operation::Add => [1.0, 1.0],
            Operation::Sub => [1.0, -1.0],
            Operation::Mul => [rhs, lhs],
            Operation::Pow(exponent) => [exponent * lhs.powf(exponent - 1.0), 0.0],
            Operation::Log => [1.0 / lhs, 0.0],
            Operation::Exp => [lhs.exp(), 0.0],
            Operation::Relu => [activation::relu_derivative(lhs), 0.0],
            Operation::Sigmoid => [activation::sigmoid_derivative(lhs), 0.0],
            Operation::Tanh => [activation::tanh_derivative(lhs), 0.0],
        }
    }
}

/// Short labels for graph renderers. Leaves have an empty label.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Leaf => Ok(()),
            Operation::Add => write!(f, "+"),
            Operation::Mul => write!(f, "*"),
            Operation::Sub => write!(f, "-"),
            Operation::Pow(exponent) => write!(f, "^{}", exponent),
            Operation::Log => write!(f, "log"),
            Operation::Exp => write!(f, "exp"),
            Operation::Relu => write!(f, "ReLU"),
            Operation::Sigmoid => write!(f, "Sigmoid"),
            Operation::Tanh => write!(f, "Tanh"),
        }
    }
}
