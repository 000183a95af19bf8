use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use std::sync::Arc;

impl Value {
    /// Checks if this node takes part in gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Sets the `requires_grad` status of this node **in-place**.
    /// Only allowed on leaf nodes.
    pub fn requires_grad_(&self, requires_grad: bool) -> Result<(), ScalarGradError> {
        let mut guard = self.try_write_data()?;
        if guard.grad_fn.is_some() {
            log::warn!(
                "requires_grad_({}) called on a non-leaf value produced by '{}'",
                requires_grad,
                guard.grad_fn.as_ref().map_or("?", |op| op.name())
            );
            return Err(ScalarGradError::RequiresGradOnNonLeaf);
        }
        guard.requires_grad = requires_grad;
        Ok(())
    }

    /// Returns the backward operation node (`grad_fn`) that produced this value.
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Creates a constant leaf holding the same `data`, detached from the graph.
    pub fn detach(&self) -> Value {
        Value::new(self.data())
    }

    /// Adds `contribution` to this node's gradient if it requires grad.
    pub(crate) fn acc_grad(&self, contribution: f64) -> Result<(), ScalarGradError> {
        let mut guard = self.try_write_data()?;
        if guard.requires_grad {
            guard.grad += contribution;
        }
        Ok(())
    }

    /// Computes the gradient of this node with respect to every ancestor.
    ///
    /// Equivalent to `backward_with_grad(1.0)`.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.backward_with_grad(1.0)
    }

    /// Runs the backward pass from this node, seeding its gradient with `seed`.
    ///
    /// The seed overwrites this node's `grad`; a node that does not require
    /// grad is left untouched. Every other reachable node that requires grad
    /// receives its contributions by addition, so running backward twice
    /// without [`Value::zero_grad_graph`] accumulates across passes. Intermediate
    /// nodes keep their grad between passes and propagate the accumulated total,
    /// so a leaf behind an intermediate grows faster than linearly.
    ///
    /// # Errors
    /// Returns `ScalarGradError` if a node lock is poisoned or a backward op
    /// returns the wrong number of contributions.
    pub fn backward_with_grad(&self, seed: f64) -> Result<(), ScalarGradError> {
        {
            let mut guard = self.try_write_data()?;
            if !guard.requires_grad {
                log::debug!("backward() called on a constant value. Nothing to seed.");
                return Ok(());
            }
            guard.grad = seed;
            if guard.grad_fn.is_none() {
                log::debug!("backward() called on a leaf value. No operation to perform.");
                return Ok(());
            }
        }

        let sorted_nodes = topological_sort(self)?;
        log::debug!(
            "backward(): seed {} propagating through {} node(s)",
            seed,
            sorted_nodes.len()
        );

        for node in sorted_nodes {
            // Release the node's lock before calling into the op: the op reads
            // its inputs, which may include this node's own operands.
            let (grad_fn, grad_output) = {
                let guard = node.try_read_data()?;
                match guard.grad_fn.as_ref() {
                    Some(op) => (Arc::clone(op), guard.grad),
                    None => continue,
                }
            };

            let input_grads = grad_fn.backward(grad_output)?;
            let inputs = grad_fn.inputs();
            if input_grads.len() != inputs.len() {
                return Err(ScalarGradError::BackwardError(format!(
                    "BackwardOp returned {} gradients, but expected {} (for op: {})",
                    input_grads.len(),
                    inputs.len(),
                    grad_fn.name()
                )));
            }

            for (input, contribution) in inputs.iter().zip(input_grads) {
                input.acc_grad(contribution)?;
            }
        }

        Ok(())
    }

    /// Resets the gradient of this node to `0.0`.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Resets the gradient of this node and of every node reachable from it.
    pub fn zero_grad_graph(&self) -> Result<(), ScalarGradError> {
        for node in topological_sort(self)? {
            node.try_write_data()?.grad = 0.0;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
