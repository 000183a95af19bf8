use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let a = Value::new(10.0);
    let b = Value::new(4.0);
    assert_relative_eq!(div_op(&a, &b).unwrap().data(), 2.5);
}

#[test]
fn test_div_graph_structure() {
    let a = Value::with_grad(1.0);
    let b = Value::with_grad(2.0);
    let result = div_op(&a, &b).unwrap();
    assert_eq!(result.op_name(), Some("mul"));
    let operands = result.operands().unwrap();
    assert!(operands[0].ptr_eq(&a));
    assert_eq!(operands[1].op_name(), Some("pow"));
}

#[test]
fn test_div_backward() {
    let a = Value::with_grad(3.0);
    let b = Value::with_grad(2.0);
    let result = &a / &b;
    result.backward().unwrap();
    assert_relative_eq!(result.data(), 1.5);
    // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
    assert_relative_eq!(a.grad(), 0.5);
    assert_relative_eq!(b.grad(), -0.75);
}

#[test]
fn test_literal_divided_by_value() {
    let f = Value::with_grad(4.0);
    let result = 10.0 / &f;
    result.backward().unwrap();
    assert_relative_eq!(result.data(), 2.5);
    assert_relative_eq!(f.grad(), -10.0 / 16.0);
}

#[test]
fn test_div_by_zero_is_not_an_error() {
    let a = Value::with_grad(1.0);
    let b = Value::with_grad(0.0);
    let result = div_op(&a, &b).unwrap();
    assert!(result.data().is_infinite());

    result.backward().unwrap();
    assert!(a.grad().is_infinite());
    assert!(!b.grad().is_finite());
}

#[test]
fn test_div_backward_grad_check() {
    let a = Value::with_grad(-1.1);
    let b = Value::with_grad(0.8);
    let func = |inputs: &[Value]| div_op(&inputs[0], &inputs[1]);
    let result = check_grad(func, &[a, b], 1e-6, 1e-5);
    assert!(result.is_ok(), "Div grad check failed: {:?}", result.err());
}
