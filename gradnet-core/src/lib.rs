// Scalar reverse-mode autodiff and a small feed-forward network on top of it.
pub mod autograd;
pub mod ops;

pub mod nn;
pub mod optim;
pub mod train;

pub mod error;
pub use error::GradNetError;

// Re-export the types needed to build and train a network via `gradnet_core::...`
pub use autograd::grad_check::{check_gradients, GradCheckError};
pub use autograd::{Graph, GraphMark, NodeId, NodeRecord};
pub use nn::{Initializer, Layer, LayerParam, Module, NeuralNetwork, Neuron};
pub use ops::{Activation, Operation};
pub use optim::{Optimizer, Sgd};
pub use train::{accuracy, train, TrainingParam, TrainingReport};
