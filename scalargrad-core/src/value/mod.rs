// src/value/mod.rs

use crate::autograd::{BackwardOp, NodeId};
use crate::error::ScalarGradError;
use crate::value_data::ValueData;
use num_traits::ToPrimitive;
use std::fmt::Debug;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod autograd_methods;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node can be the operand of many downstream nodes
///     and still be held by user code. Cloning a `Value` clones the handle, not
///     the node.
/// 2.  **Interior Mutability:** `grad` is accumulated in place during backward
///     through an immutable handle, under the lock.
///
/// Every arithmetic operation on `Value`s returns a new node that records its
/// operands, building the graph as the expression is evaluated.
pub struct Value {
    pub(crate) data: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Creates a constant leaf. It never accumulates gradient.
    ///
    /// This is also what numeric literals mixed into expressions become.
    pub fn new(data: f64) -> Self {
        Self::leaf(data, false)
    }

    /// Creates a leaf that tracks gradient.
    pub fn with_grad(data: f64) -> Self {
        Self::leaf(data, true)
    }

    /// Creates a leaf with an explicit `requires_grad` flag.
    pub fn leaf(data: f64, requires_grad: bool) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::new(data, requires_grad))),
        }
    }

    /// Creates a constant leaf from any numeric literal.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InvalidOperand` if the literal has no `f64`
    /// representation.
    pub fn from_literal<T: ToPrimitive + Debug>(literal: T) -> Result<Self, ScalarGradError> {
        literal
            .to_f64()
            .map(Value::new)
            .ok_or_else(|| ScalarGradError::InvalidOperand {
                operation: "from_literal".to_string(),
                reason: format!("{:?} is not representable as f64", literal),
            })
    }

    /// Wraps the result of an operation together with its backward context.
    pub(crate) fn from_op(data: f64, grad_fn: Arc<dyn BackwardOp>) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::from_op(data, grad_fn))),
        }
    }

    /// Returns the forward-computed scalar.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns `true` if this node has no recorded operation history.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Label of the operation that produced this node, `None` for leaves.
    pub fn op_name(&self) -> Option<&'static str> {
        self.read_data().grad_fn.as_ref().map(|op| op.name())
    }

    /// Returns the operands this node was computed from, in operand order.
    ///
    /// Leaves (including results of operations on constants only) have none.
    pub fn operands(&self) -> Result<Vec<Value>, ScalarGradError> {
        let grad_fn = self.try_read_data()?.grad_fn.clone();
        Ok(grad_fn.map(|op| op.inputs()).unwrap_or_default())
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Identity of the underlying node, stable across clones of the handle.
    pub fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    /// Acquires a read lock on the node.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> RwLockReadGuard<'_, ValueData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, ValueData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Fallible counterpart of [`Value::read_data`].
    pub(crate) fn try_read_data(&self) -> Result<RwLockReadGuard<'_, ValueData>, ScalarGradError> {
        self.data
            .read()
            .map_err(|_| ScalarGradError::LockPoisoned("value data (read)".to_string()))
    }

    /// Fallible counterpart of [`Value::write_data`].
    pub(crate) fn try_write_data(&self) -> Result<RwLockWriteGuard<'_, ValueData>, ScalarGradError> {
        self.data
            .write()
            .map_err(|_| ScalarGradError::LockPoisoned("value data (write)".to_string()))
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            data: Arc::clone(&self.data), // Clone the Arc, not the ValueData
        }
    }
}
