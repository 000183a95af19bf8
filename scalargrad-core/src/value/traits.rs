// src/value/traits.rs
//
// Standard trait implementations for `Value`: operator overloading over the
// `_op` functions, formatting, conversions and `Sum`.

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Operands are left out: printing them would walk the whole graph.
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("requires_grad", &guard.requires_grad)
            .field("op", &guard.grad_fn.as_ref().map(|op| op.name()))
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={:.6}, grad={:.6})", guard.data, guard.grad)
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}

impl FromStr for Value {
    type Err = ScalarGradError;

    /// Parses a decimal literal into a constant leaf.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Value::new)
            .map_err(|_| ScalarGradError::InvalidLiteral(s.to_string()))
    }
}

/// Implements a binary operator for every combination of owned/borrowed
/// `Value` and `f64` operands, delegating to the given `_op` function.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, other: &'b Value) -> Value {
                $op_fn(self, other).unwrap_or_else(|e| {
                    panic!("Value {} operation failed: {}", stringify!($method), e)
                })
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, other: Value) -> Value {
                $trait::$method(&self, &other)
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            type Output = Value;
            fn $method(self, other: &'b Value) -> Value {
                $trait::$method(&self, other)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;
            fn $method(self, other: Value) -> Value {
                $trait::$method(self, &other)
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;
            fn $method(self, other: f64) -> Value {
                $trait::$method(self, &Value::new(other))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, other: f64) -> Value {
                $trait::$method(&self, &Value::new(other))
            }
        }

        impl<'b> $trait<&'b Value> for f64 {
            type Output = Value;
            fn $method(self, other: &'b Value) -> Value {
                $trait::$method(&Value::new(self), other)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, other: Value) -> Value {
                $trait::$method(&Value::new(self), &other)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<'a> Neg for &'a Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self).unwrap_or_else(|e| panic!("Value negation failed: {}", e))
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        -&self
    }
}

impl Sum for Value {
    /// Left fold of additions. An empty iterator sums to a constant `0.0`.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.reduce(|acc, v| &acc + &v)
            .unwrap_or_else(|| Value::new(0.0))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.cloned().sum()
    }
}
