//! # Automatic Differentiation Engine
//!
//! Scalar reverse-mode autodiff over an arena of nodes.
//!
//! - [`graph`]: the [`Graph`] arena, [`NodeId`] handles, marks and node snapshots.
//! - `backward`: topological ordering and gradient propagation.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod grad_check;
pub mod graph;

mod backward;

pub use graph::{Graph, GraphMark, NodeId, NodeRecord};
