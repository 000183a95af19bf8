// src/value_data.rs
use std::sync::{Arc, PoisonError};

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Internal storage and metadata for a Value node.
///
/// This struct holds the forward scalar, the accumulated gradient and the
/// autograd linkage. It is wrapped in `Arc<RwLock<ValueData>>` by the `Value`
/// struct to allow shared ownership (one node, many consumers) and interior
/// mutability of `grad`.
#[derive(Debug)]
pub struct ValueData {
    /// The forward-computed scalar. Fixed at construction.
    pub(crate) data: f64,
    /// Accumulated gradient of the backward root with respect to this node.
    /// Starts at `0.0` and only grows by addition during a backward pass.
    pub(crate) grad: f64,
    /// Flag indicating if the node takes part in gradient computation.
    /// Constants (literals, `Value::new`) have this set to `false` and never
    /// accumulate gradient.
    pub(crate) requires_grad: bool,
    /// The backward operation that produced this node.
    /// Leaf nodes (created directly by the user) have `grad_fn = None`.
    /// The operation owns handles to its operands, which is what links the node
    /// to its predecessors in the graph.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp>>,
}

impl ValueData {
    /// Creates the record for a leaf node.
    pub fn new(data: f64, requires_grad: bool) -> Self {
        ValueData {
            data,
            grad: 0.0,
            requires_grad,
            grad_fn: None,
        }
    }

    /// Creates the record for a node produced by `grad_fn`.
    ///
    /// Such a node always requires grad: operations only record a backward
    /// op when at least one operand requires grad.
    pub(crate) fn from_op(data: f64, grad_fn: Arc<dyn BackwardOp>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            requires_grad: true,
            grad_fn: Some(grad_fn),
        }
    }

    /// Returns `true` if the node has no recorded history.
    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

impl Drop for ValueData {
    /// Releases the history of this node from a worklist, so dropping a long
    /// chain uses constant stack depth. Every operand whose last handle is
    /// held here has its own `grad_fn` taken and queued the same way.
    fn drop(&mut self) {
        let root_op = match self.grad_fn.take() {
            Some(op) => op,
            None => return,
        };

        let mut pending: Vec<Value> = Vec::new();
        release_op(root_op, &mut pending);

        while let Some(mut value) = pending.pop() {
            // Shared nodes stay alive; only the last handle takes the history.
            let grad_fn = Arc::get_mut(&mut value.data).and_then(|lock| {
                lock.get_mut()
                    .unwrap_or_else(PoisonError::into_inner)
                    .grad_fn
                    .take()
            });
            if let Some(op) = grad_fn {
                release_op(op, &mut pending);
            }
            // `value` now has no history and drops without recursing.
        }
    }
}

/// Queues the inputs of `op` if this is its last handle, then releases it.
fn release_op(op: Arc<dyn BackwardOp>, pending: &mut Vec<Value>) {
    if Arc::strong_count(&op) == 1 {
        pending.extend(op.inputs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaf_record() {
        let record = ValueData::new(3.5, true);
        assert_eq!(record.data, 3.5);
        assert_eq!(record.grad, 0.0);
        assert!(record.requires_grad);
        assert!(record.is_leaf());
    }

    #[test]
    fn test_drop_keeps_history_of_shared_nodes() {
        let x = Value::with_grad(2.0);
        let inner = &x * &x;
        let outer = &(&inner + 1.0) * 3.0;
        drop(outer);

        // `inner` is still held here, so its history survives the teardown.
        assert_eq!(inner.op_name(), Some("mul"));
        assert_eq!(inner.operands().unwrap().len(), 2);
        inner.backward().unwrap();
        assert_eq!(x.grad(), 4.0);
    }

    #[test]
    fn test_drop_with_repeated_operand() {
        let x = Value::with_grad(1.5);
        let mut acc = x.clone();
        for _ in 0..100 {
            acc = &acc + &acc;
        }
        drop(acc);
        assert!(x.is_leaf());
        assert_eq!(x.data(), 1.5);
    }
}
