use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input must be a leaf value (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
    #[error("Value error during gradient check: {0}")]
    ValueError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ValueError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` is evaluated once on `inputs` and differentiated with `backward()`. Then,
/// for every input that requires grad, `func` is re-evaluated on copies of the
/// inputs where that input is shifted by `+epsilon` and `-epsilon`; the numerical
/// gradient is `(f(x + eps) - f(x - eps)) / (2 * eps)`.
///
/// The gradients agree if their absolute difference is within `tolerance` or
/// their relative difference is within `tolerance`.
///
/// Gradients already accumulated on the inputs are reset before the check and
/// hold the analytical gradients afterwards.
///
/// # Errors
/// Returns a `GradCheckError` describing the first input whose gradients disagree,
/// or the failure that prevented the comparison.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- Initial Checks ---
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    // --- 1. Initial Forward and Backward Pass ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;

    let any_input_requires_grad = inputs.iter().any(|v| v.requires_grad());
    if any_input_requires_grad && !output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    if output.requires_grad() {
        output.backward().map_err(GradCheckError::BackwardPassError)?;
    }

    // --- 2. Compare Against Finite Differences ---
    for (i, original_input) in inputs.iter().enumerate() {
        if !original_input.requires_grad() {
            continue;
        }

        let analytical_grad = original_input.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let x = original_input.data();
        let loss_plus = evaluate_perturbed(&func, inputs, i, x + epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, i, x - epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        log::debug!(
            "check_grad: input {} analytical {} numerical {}",
            i,
            analytical_grad,
            numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Evaluates `func` with input `index` replaced by a fresh leaf holding `shifted`.
///
/// Fresh leaves keep the perturbed evaluation out of the graph being checked.
fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[Value],
    index: usize,
    shifted: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let perturbed: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(j, v)| {
            let data = if j == index { shifted } else { v.data() };
            Value::new(data)
        })
        .collect();
    let output = func(&perturbed).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.data())
}
