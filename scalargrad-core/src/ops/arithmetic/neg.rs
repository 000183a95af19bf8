use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::link_result;
use crate::value::Value;
use std::sync::Arc;

/// Backward operation context for unary negation.
#[derive(Debug)]
struct NegBackward {
    input: Value,
}

impl BackwardOp for NegBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        Ok(vec![-grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn name(&self) -> &'static str {
        "neg"
    }
}

/// Negates a value.
pub fn neg_op(a: &Value) -> Result<Value, ScalarGradError> {
    let (data, requires_grad) = {
        let guard = a.try_read_data()?;
        (guard.data, guard.requires_grad)
    };

    Ok(link_result(-data, requires_grad, || {
        Arc::new(NegBackward { input: a.clone() })
    }))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
