// ============================================================================
// Calculator Library
// Minimal arithmetic utilities over IEEE-754 double-precision floats
// ============================================================================

//! # Calculator
//!
//! A minimal arithmetic utility library over `f64`.
//!
//! ## Features
//!
//! - **Five stateless operations**: add, subtract, multiply, divide, sqrt
//! - **Guarded preconditions**: division by zero and negative square root
//!   are reported as typed errors rather than silently producing
//!   infinities or NaN
//! - **IEEE-754 pass-through** for everything else: NaN, infinities, and
//!   denormals propagate unvalidated
//! - **Pure functions**: no shared state, safe to call concurrently from
//!   any number of threads
//!
//! ## Example
//!
//! ```rust
//! use calculator::{add, divide, sqrt, ArithmeticError};
//!
//! assert_eq!(add(1.0, 2.0), 3.0);
//! assert_eq!(divide(10.0, 5.0), Ok(2.0));
//! assert_eq!(sqrt(16.0), Ok(4.0));
//!
//! // Guarded preconditions surface as errors, not panics.
//! assert!(matches!(
//!     divide(1.0, 0.0),
//!     Err(ArithmeticError::DivisionByZero { .. })
//! ));
//! ```

pub mod arithmetic;

// Re-exports for convenience
pub use arithmetic::{add, divide, multiply, sqrt, subtract};
pub use arithmetic::{ArithmeticError, ArithmeticResult};
