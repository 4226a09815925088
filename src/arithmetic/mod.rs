// ============================================================================
// Arithmetic Module
// Guarded floating-point arithmetic over f64
// ============================================================================
//
// This module provides:
// - add/subtract/multiply/divide/sqrt: the five public operations
// - ArithmeticError: error types for the two guarded preconditions
//
// Design principles:
// - Direct pass-through to IEEE-754 primitives
// - Fallible operations return Result (no panics)
// - NaN and infinities are never validated, they propagate

mod errors;
mod ops;

pub use errors::{ArithmeticError, ArithmeticResult};
pub use ops::{add, divide, multiply, sqrt, subtract};
