use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Value::new(1.5);
    let b = Value::new(-4.0);
    let result = add_op(&a, &b).unwrap();
    assert_relative_eq!(result.data(), -2.5);
    assert!(!result.requires_grad());
    assert!(result.is_leaf(), "constants only: no history is recorded");
}

#[test]
fn test_add_propagate_requires_grad() {
    let a = Value::with_grad(1.0);
    let b = Value::new(2.0);
    let result = add_op(&a, &b).unwrap();
    assert!(result.requires_grad());
    assert_eq!(result.op_name(), Some("add"));

    let operands = result.operands().unwrap();
    assert_eq!(operands.len(), 2);
    assert!(operands[0].ptr_eq(&a));
    assert!(operands[1].ptr_eq(&b));
}

#[test]
fn test_add_backward() {
    let a = Value::with_grad(3.0);
    let b = Value::with_grad(-7.0);
    let result = add_op(&a, &b).unwrap();
    result.backward().unwrap();

    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), 1.0);
}

#[test]
fn test_add_same_operand_twice() {
    let a = Value::with_grad(0.25);
    let result = add_op(&a, &a).unwrap();
    result.backward().unwrap();
    assert_relative_eq!(result.data(), 0.5);
    assert_relative_eq!(a.grad(), 2.0);
}

#[test]
fn test_add_constant_operand_gets_no_grad() {
    let a = Value::with_grad(3.0);
    let c = Value::new(10.0);
    let result = add_op(&a, &c).unwrap();
    result.backward().unwrap();
    assert_relative_eq!(a.grad(), 1.0);
    assert_eq!(c.grad(), 0.0);
}

#[test]
fn test_add_backward_grad_check() {
    let a = Value::with_grad(1.3);
    let b = Value::with_grad(-0.6);
    let func = |inputs: &[Value]| add_op(&inputs[0], &inputs[1]);
    let result = check_grad(func, &[a, b], 1e-6, 1e-6);
    assert!(result.is_ok(), "Add grad check failed: {:?}", result.err());
}
