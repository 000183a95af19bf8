use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::link_result;
use crate::value::Value;
use std::sync::Arc;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication.
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
}

// --- Backward Operation Implementation ---

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        let a_data = self.a.try_read_data()?.data;
        let b_data = self.b.try_read_data()?.data;

        // grad_a = grad_output * b, grad_b = grad_output * a
        Ok(vec![grad_output * b_data, grad_output * a_data])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn name(&self) -> &'static str {
        "mul"
    }
}

// --- Forward Operation ---

/// Multiplies two values.
pub fn mul_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let (a_data, a_requires_grad) = {
        let guard = a.try_read_data()?;
        (guard.data, guard.requires_grad)
    };
    let (b_data, b_requires_grad) = {
        let guard = b.try_read_data()?;
        (guard.data, guard.requires_grad)
    };

    Ok(link_result(
        a_data * b_data,
        a_requires_grad || b_requires_grad,
        || {
            Arc::new(MulBackward {
                a: a.clone(),
                b: b.clone(),
            })
        },
    ))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
