// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear functions applied to a single `Value`.
//!
//! ## Currently Implemented:
//! - [`relu_op`](relu/fn.relu_op.html): Rectified Linear Unit.

pub mod relu;

// Re-export key functions
pub use relu::relu_op;
