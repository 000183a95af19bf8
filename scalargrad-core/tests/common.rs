use scalargrad_core::Value;

/// Installs `env_logger` once per test binary. Run with
/// `RUST_LOG=scalargrad_core=trace` to see the graph traversal.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Shared-operand expression: `x` feeds five different nodes.
///
/// Built exactly as written, left to right:
/// `z = 2*x + 2 + x`, `q = relu(z) + z*x`, `h = relu(z*z)`, `y = h + q + q*x`.
#[allow(dead_code)]
pub fn shared_operand_expression(x: &Value) -> Value {
    let z = 2.0 * x + 2.0 + x;
    let q = z.relu() + &z * x;
    let h = (&z * &z).relu();
    &h + &q + &q * x
}

/// Two-variable chain with `c` and `d` reassigned several times.
#[allow(dead_code)]
pub fn two_variable_chain(a: &Value, b: &Value) -> Value {
    let c = a + b;
    let d = a * b + b.pow(3.0);
    let c = &c + &c + 1.0;
    let c = &c + 1.0 + &c + (-a);
    let d = &d + &d * 2.0 + (b + a).relu();
    let d = &d + 3.0 * &d + (b - a).relu();
    let e = &c - &d;
    let f = e.pow(2.0);
    let g = &f / 2.0;
    &g + 10.0 / &f
}
