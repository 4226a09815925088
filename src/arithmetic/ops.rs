// ============================================================================
// Arithmetic Operations
// Thin guarded wrappers over IEEE-754 double-precision primitives
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};

// ============================================================================
// Infallible Operations
// ============================================================================

/// Add two numbers.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract the second number from the first.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

// ============================================================================
// Guarded Operations
// ============================================================================

/// Divide the first number by the second.
///
/// Only an exactly-zero divisor is rejected; negative zero counts as zero.
/// NaN and infinite operands are not validated and propagate per IEEE-754.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero.
#[inline]
pub fn divide(a: f64, b: f64) -> ArithmeticResult<f64> {
    if b == 0.0 {
        tracing::debug!("rejected division by zero: {} / {}", a, b);
        return Err(ArithmeticError::DivisionByZero {
            dividend: a,
            divisor: b,
        });
    }
    Ok(a / b)
}

/// Principal (non-negative) square root.
///
/// `sqrt(+inf)` yields `+inf` and `sqrt(-0.0)` yields `-0.0`; NaN
/// propagates. Only strictly negative input is rejected.
///
/// # Errors
/// Returns `NegativeInput` if `a` is less than zero.
#[inline]
pub fn sqrt(a: f64) -> ArithmeticResult<f64> {
    if a < 0.0 {
        tracing::debug!("rejected square root of negative input: {}", a);
        return Err(ArithmeticError::NegativeInput { operand: a });
    }
    Ok(a.sqrt())
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_add_commutes(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn test_subtract_antisymmetric(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(subtract(a, b), -subtract(b, a));
        }

        #[test]
        fn test_multiply_commutes(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(multiply(a, b), multiply(b, a));
        }

        #[test]
        fn test_divide_round_trips(
            a in -1e6f64..1e6,
            b in (-1e6f64..1e6).prop_filter("divisor bounded away from zero", |b| b.abs() > 1e-6),
        ) {
            let quotient = divide(a, b).unwrap();
            prop_assert!((multiply(quotient, b) - a).abs() <= 1e-9 * a.abs().max(1.0));
        }

        #[test]
        fn test_divide_by_zero_always_fails(a in proptest::num::f64::ANY) {
            let pos_zero_fails = matches!(
                divide(a, 0.0),
                Err(ArithmeticError::DivisionByZero { .. })
            );
            prop_assert!(pos_zero_fails);
            let neg_zero_fails = matches!(
                divide(a, -0.0),
                Err(ArithmeticError::DivisionByZero { .. })
            );
            prop_assert!(neg_zero_fails);
        }

        #[test]
        fn test_sqrt_round_trips(a in 0f64..1e12) {
            let root = sqrt(a).unwrap();
            prop_assert!((multiply(root, root) - a).abs() <= 1e-9 * a.max(1.0));
        }

        #[test]
        fn test_sqrt_negative_always_fails(a in -1e12f64..-f64::MIN_POSITIVE) {
            let sqrt_neg_fails = matches!(
                sqrt(a),
                Err(ArithmeticError::NegativeInput { .. })
            );
            prop_assert!(sqrt_neg_fails);
        }
    }
}
