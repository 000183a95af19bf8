use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides `a` by `b`.
///
/// Built as `a * b^-1`, so the graph holds a `pow` node and a `mul` node.
/// Division by a zero-valued `b` yields IEEE-754 infinities/NaN in `data` and
/// `grad` rather than an error.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let b_inv = pow_op(b, -1.0)?;
    mul_op(a, &b_inv)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
