use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::link_result;
use crate::value::Value;
use std::sync::Arc;

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Value,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        let x = self.input.try_read_data()?.data;
        // Strictly positive: the derivative at exactly zero is 0.
        let local = if x > 0.0 { grad_output } else { 0.0 };
        Ok(vec![local])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn name(&self) -> &'static str {
        "relu"
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, x)`.
///
/// Only negative inputs are clamped, so `NaN` and `-0.0` pass through unchanged.
pub fn relu_op(a: &Value) -> Result<Value, ScalarGradError> {
    let (x, requires_grad) = {
        let guard = a.try_read_data()?;
        (guard.data, guard.requires_grad)
    };
    let data = if x < 0.0 { 0.0 } else { x };

    Ok(link_result(data, requires_grad, || {
        Arc::new(ReluBackward { input: a.clone() })
    }))
}

impl Value {
    /// Applies the Rectified Linear Unit.
    pub fn relu(&self) -> Value {
        relu_op(self).unwrap_or_else(|e| panic!("Value relu operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
