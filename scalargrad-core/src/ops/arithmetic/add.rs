use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::link_result;
use crate::value::Value;
use std::sync::Arc;

// --- Backward Operation Structure ---

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

// --- Backward Operation Implementation ---

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        // d(a + b)/da = d(a + b)/db = 1
        Ok(vec![grad_output, grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

// --- Forward Operation ---

/// Adds two values.
///
/// The result requires grad if either operand does.
pub fn add_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let (a_data, a_requires_grad) = {
        let guard = a.try_read_data()?;
        (guard.data, guard.requires_grad)
    };
    let (b_data, b_requires_grad) = {
        let guard = b.try_read_data()?;
        (guard.data, guard.requires_grad)
    };

    Ok(link_result(
        a_data + b_data,
        a_requires_grad || b_requires_grad,
        || {
            Arc::new(AddBackward {
                a: a.clone(),
                b: b.clone(),
            })
        },
    ))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
