// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator::{add, divide, multiply, sqrt, subtract};

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Calculator Example ===\n");

    println!("add(1, 2)      = {}", add(1.0, 2.0));
    println!("subtract(1, 2) = {}", subtract(1.0, 2.0));
    println!("multiply(2, 5) = {}", multiply(2.0, 5.0));

    match divide(10.0, 5.0) {
        Ok(quotient) => println!("divide(10, 5)  = {}", quotient),
        Err(e) => println!("divide(10, 5)  failed: {}", e),
    }

    match sqrt(16.0) {
        Ok(root) => println!("sqrt(16)       = {}", root),
        Err(e) => println!("sqrt(16)       failed: {}", e),
    }

    println!("\n=== Guarded Preconditions ===\n");

    match divide(10.0, 0.0) {
        Ok(quotient) => println!("divide(10, 0)  = {}", quotient),
        Err(e) => println!("divide(10, 0)  failed: {}", e),
    }

    match sqrt(-1.0) {
        Ok(root) => println!("sqrt(-1)       = {}", root),
        Err(e) => println!("sqrt(-1)       failed: {}", e),
    }

    println!("\n=== IEEE-754 Pass-Through ===\n");

    println!("add(+inf, -1)  = {}", add(f64::INFINITY, -1.0));
    println!("sqrt(+inf)     = {:?}", sqrt(f64::INFINITY));
    println!("add(NaN, 1)    = {}", add(f64::NAN, 1.0));
}
