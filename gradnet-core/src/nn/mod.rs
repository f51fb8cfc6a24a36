// src/nn/mod.rs
// Network building blocks: parameters live as leaves in a Graph, modules hold their handles.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod network;

// Re-export common items
pub use init::Initializer;
pub use layers::layer::{Layer, LayerParam};
pub use layers::neuron::Neuron;
pub use losses::cross_entropy::{cross_entropy_loss, l2_penalty, softmax_in_place};
pub use module::Module;
pub use network::NeuralNetwork;
