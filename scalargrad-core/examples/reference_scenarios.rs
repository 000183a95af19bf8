//! # Reference Scenarios
//!
//! Builds the two reference expressions, runs backward on each and prints the
//! forward value and the leaf gradients.
//!
//! 1.  **Shared operand**: `x` is consumed by five nodes; its gradient collects
//!     every path.
//! 2.  **Two-variable chain**: `c` and `d` are reassigned several times, then
//!     combined through power and division.
//!
//! ## Execution
//! `cargo run --example reference_scenarios`
//!
//! Set `RUST_LOG=scalargrad_core=trace` to log the graph traversal.

use scalargrad_core::{ScalarGradError, Value};

fn shared_operand(x_data: f64) -> Result<(), ScalarGradError> {
    println!("Test Case 1: ");
    let x = Value::with_grad(x_data);
    let z = 2.0 * &x + 2.0 + &x;
    let q = z.relu() + &z * &x;
    let h = (&z * &z).relu();
    let y = &h + &q + &q * &x;
    y.backward()?;

    println!("y.data = {}", y.data());
    println!("x.grad = {}", x.grad());
    Ok(())
}

fn two_variable_chain(a_data: f64, b_data: f64) -> Result<(), ScalarGradError> {
    println!("\nTest Case 2: ");
    let a = Value::with_grad(a_data);
    let b = Value::with_grad(b_data);
    let c = &a + &b;
    let d = &a * &b + b.pow(3.0);
    let c = &c + &c + 1.0;
    let c = &c + 1.0 + &c + (-&a);
    let d = &d + &d * 2.0 + (&b + &a).relu();
    let d = &d + 3.0 * &d + (&b - &a).relu();
    let e = &c - &d;
    let f = e.pow(2.0);
    let g = &f / 2.0;
    let g = &g + 10.0 / &f;
    g.backward()?;

    println!("g.data = {}", g.data());
    println!("a.grad = {}", a.grad());
    println!("b.grad = {}", b.grad());
    Ok(())
}

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    shared_operand(14.0)?;
    two_variable_chain(-12.0, 6.0)?;
    Ok(())
}
