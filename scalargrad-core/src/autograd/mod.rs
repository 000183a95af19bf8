//! # Autograd
//!
//! Reverse-mode differentiation over the graph of `Value` nodes.
//!
//! - [`BackwardOp`]: the local derivative rule recorded by every operation.
//! - [`graph`]: node identity and topological ordering of the graph.
//! - [`grad_check`]: finite-difference verification of backward rules.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{topological_sort, NodeId};
