use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() {
    let a = Value::new(-12.0);
    let b = Value::new(6.0);
    let result = mul_op(&a, &b).unwrap();
    assert_relative_eq!(result.data(), -72.0);
    assert!(!result.requires_grad());
}

#[test]
fn test_mul_product_rule() {
    let a = Value::with_grad(3.0);
    let b = Value::with_grad(4.0);
    let result = mul_op(&a, &b).unwrap();
    assert_eq!(result.op_name(), Some("mul"));
    result.backward().unwrap();

    assert_relative_eq!(result.data(), 12.0);
    assert_relative_eq!(a.grad(), 4.0);
    assert_relative_eq!(b.grad(), 3.0);
}

#[test]
fn test_mul_square_accumulates_both_paths() {
    let x = Value::with_grad(5.0);
    let result = mul_op(&x, &x).unwrap();
    result.backward().unwrap();
    assert_relative_eq!(x.grad(), 10.0);
}

#[test]
fn test_mul_by_literal() {
    let x = Value::with_grad(14.0);
    let result = 2.0 * &x;
    result.backward().unwrap();
    assert_relative_eq!(result.data(), 28.0);
    assert_relative_eq!(x.grad(), 2.0);

    // The literal became a constant operand.
    let literal = &result.operands().unwrap()[0];
    assert!(!literal.requires_grad());
    assert_eq!(literal.grad(), 0.0);
}

#[test]
fn test_mul_backward_scales_upstream() {
    let a = Value::with_grad(2.0);
    let b = Value::with_grad(-3.0);
    let result = mul_op(&a, &b).unwrap();
    result.backward_with_grad(0.5).unwrap();
    assert_relative_eq!(a.grad(), -1.5);
    assert_relative_eq!(b.grad(), 1.0);
}

#[test]
fn test_mul_backward_grad_check() {
    let a = Value::with_grad(1.7);
    let b = Value::with_grad(-2.2);
    let func = |inputs: &[Value]| mul_op(&inputs[0], &inputs[1]);
    let result = check_grad(func, &[a, b], 1e-6, 1e-6);
    assert!(result.is_ok(), "Mul grad check failed: {:?}", result.err());
}
