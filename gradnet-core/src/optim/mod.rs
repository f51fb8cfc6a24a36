// gradnet-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! An optimizer holds the handles of the parameters it updates and reads
//! their gradients from the [`Graph`](crate::Graph) after a backward pass.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;

#[cfg(test)]
mod sgd_test;
