use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Any operation that creates a non-leaf `Value` (a value resulting from an operation
/// on operands that require gradients) has an associated `BackwardOp` implementation.
/// It is stored in the output node's `grad_fn` field and is used during the
/// `backward()` call to propagate gradients according to the chain rule.
///
/// The trait requires `Debug + Send + Sync` because the `Arc<dyn BackwardOp>` holding
/// the context is shared by every handle to the output node, and `Value` itself is
/// `Send + Sync`.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes the local gradient contributions for the operation's inputs,
    /// given the gradient flowing into the operation's output (`grad_output`).
    ///
    /// If the operation is \( y = f(x_1, ..., x_n) \), this returns
    /// \( \frac{dL}{dy} \cdot \frac{\partial y}{\partial x_i} \) for each input \( i \).
    ///
    /// # Returns
    /// * `Ok(Vec<f64>)`: one contribution per input. The order **must** match the
    ///   order of `inputs()`. The scheduler adds each contribution into the
    ///   corresponding input's `grad` (if that input requires grad).
    /// * `Err(ScalarGradError)`: if an input node could not be read.
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError>;

    /// Returns handles to the input nodes that participated in the forward operation.
    ///
    /// This is what links the output node back to its predecessors during graph
    /// traversal. Repeated operands (e.g. `x * x`) appear once per use.
    fn inputs(&self) -> Vec<Value>;

    /// Short label of the operation (`"add"`, `"mul"`, ...), used in logs and `Debug` output.
    fn name(&self) -> &'static str;
}
