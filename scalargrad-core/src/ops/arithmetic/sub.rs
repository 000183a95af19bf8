use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts `b` from `a`.
///
/// Built as `a + (-b)`: the graph holds a `neg` node and an `add` node, and
/// gradients flow through both.
pub fn sub_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let neg_b = neg_op(b)?;
    add_op(a, &neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
