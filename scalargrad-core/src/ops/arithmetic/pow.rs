// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::link_result;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::fmt::Debug;
use std::sync::Arc;

// --- Backward Operation ---

#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        let x = self.base.try_read_data()?.data;
        let n = self.exponent;
        // d(x^n)/dx = n * x^(n-1). At x = 0 with n < 1 this is inf/NaN, left as is.
        Ok(vec![n * x.powf(n - 1.0) * grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }

    fn name(&self) -> &'static str {
        "pow"
    }
}

// --- Forward Operation ---

/// Raises `base` to a constant real `exponent`.
///
/// The exponent is not a graph node and receives no gradient.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    let (data, requires_grad) = {
        let guard = base.try_read_data()?;
        (guard.data, guard.requires_grad)
    };

    Ok(link_result(data.powf(exponent), requires_grad, || {
        Arc::new(PowBackward {
            base: base.clone(),
            exponent,
        })
    }))
}

// --- Value Methods ---

impl Value {
    /// Raises this value to a constant power.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
            .unwrap_or_else(|e| panic!("Value power operation failed: {}", e))
    }

    /// Raises this value to a constant power given as any numeric type.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InvalidOperand` if the exponent has no `f64`
    /// representation.
    pub fn pow_scalar<E: ToPrimitive + Debug>(&self, exponent: E) -> Result<Value, ScalarGradError> {
        let n = exponent
            .to_f64()
            .ok_or_else(|| ScalarGradError::InvalidOperand {
                operation: "pow".to_string(),
                reason: format!("exponent {:?} is not representable as f64", exponent),
            })?;
        pow_op(self, n)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
