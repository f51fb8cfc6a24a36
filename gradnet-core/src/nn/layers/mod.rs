pub mod layer;
pub mod neuron;
