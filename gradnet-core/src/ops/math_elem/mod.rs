//! Element-wise transcendental functions on a single node.

pub mod exp;
pub mod log;
