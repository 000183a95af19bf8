//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Arithmetic on [`Value`]s builds a computation graph as the expression is
//! evaluated; [`Value::backward`] walks that graph in reverse topological order
//! and accumulates `∂output/∂node` into every node that requires grad.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::with_grad(3.0);
//! let b = Value::with_grad(4.0);
//! let c = &a * &b + 1.0;
//! c.backward().unwrap();
//! assert_eq!(c.data(), 13.0);
//! assert_eq!(a.grad(), 4.0);
//! assert_eq!(b.grad(), 3.0);
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;
pub mod value_data;

// Re-export the main types so they are reachable as `scalargrad_core::Value` etc.
pub use error::ScalarGradError;
pub use value::Value;
// Re-export traits required by public functions
pub use num_traits;
