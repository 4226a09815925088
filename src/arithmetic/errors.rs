// ============================================================================
// Arithmetic Errors
// Error types for floating-point arithmetic operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during arithmetic operations.
///
/// Each variant carries the operand(s) that triggered the failure, so the
/// rendered message identifies them. Callers should branch on the variant,
/// not on message text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticError {
    /// Attempted division by an exactly-zero divisor
    DivisionByZero {
        /// The dividend of the rejected division
        dividend: f64,
        /// The divisor (positive or negative zero)
        divisor: f64,
    },
    /// Attempted square root of a strictly negative number
    NegativeInput {
        /// The offending operand
        operand: f64,
    },
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero { dividend, divisor } => {
                write!(f, "division by zero: {} / {}", dividend, divisor)
            },
            ArithmeticError::NegativeInput { operand } => {
                write!(f, "square root of negative input: {}", operand)
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
