//! # Scalar Operations Module (`ops`)
//!
//! This module defines the differentiable operations of the engine. Operations are
//! categorized into submodules based on their functionality.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `pow_op`, ...)
//!   that performs the forward computation and sets up the backward pass for autograd.
//!   The operator impls on `Value` (`+`, `-`, `*`, `/`, unary `-`) and the `Value`
//!   methods (`pow`, `relu`) are thin wrappers over them.
//! - **`Backward` Structs:** Each primitive operation has a corresponding struct
//!   (e.g. `AddBackward`, `PowBackward`) implementing
//!   [`BackwardOp`](crate::autograd::BackwardOp). It stores the operand handles
//!   (and constants such as the exponent) needed to compute local gradients.
//! - **Compositions:** `sub_op` and `div_op` have no backward struct of their own;
//!   they are built from `add`/`neg` and `mul`/`pow`, and their gradients follow
//!   from those nodes.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, neg, sub, mul, pow, div.
//! - [`activation`]: relu.

use crate::autograd::BackwardOp;
use crate::value::Value;
use std::sync::Arc;

pub mod activation;
pub mod arithmetic;

/// Builds the output node of an operation.
///
/// If `requires_grad` is set, the backward context produced by `make_grad_fn` is
/// recorded on the output. Otherwise the output is a constant leaf and the
/// context is never built.
pub(crate) fn link_result<F>(data: f64, requires_grad: bool, make_grad_fn: F) -> Value
where
    F: FnOnce() -> Arc<dyn BackwardOp>,
{
    if requires_grad {
        Value::from_op(data, make_grad_fn())
    } else {
        Value::new(data)
    }
}
