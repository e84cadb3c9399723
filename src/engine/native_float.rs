// ============================================================================
// Native Float Engine
// Always-available fallback on 64-bit IEEE floats
// ============================================================================

use crate::interfaces::ArithmeticEngine;
use crate::numeric::{canonical_from_f64, NumericError, NumericResult, ParseError};
use std::cmp::Ordering;

/// Arithmetic on `f64`.
///
/// Results are re-canonicalized with the same shortest round-trip rule used
/// for float input, so `0.1 + 0.2` yields `0.30000000000000004`. Operands with
/// more than ~17 significant digits lose precision; that is the accepted cost
/// of the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFloatEngine;

impl NativeFloatEngine {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    fn operand(value: &str) -> NumericResult<f64> {
        value.parse::<f64>().map_err(|_| {
            NumericError::Parse(ParseError::NotNumeric {
                input: value.to_string(),
            })
        })
    }

    fn finish(
        operation: &'static str,
        lhs: &str,
        rhs: &str,
        result: f64,
    ) -> NumericResult<String> {
        // Infinity and NaN never escape as values
        canonical_from_f64(result).ok_or_else(|| NumericError::overflow(operation, lhs, rhs))
    }

    fn apply(
        operation: &'static str,
        lhs: &str,
        rhs: &str,
        op: impl FnOnce(f64, f64) -> f64,
    ) -> NumericResult<String> {
        let result = op(Self::operand(lhs)?, Self::operand(rhs)?);
        Self::finish(operation, lhs, rhs, result)
    }
}

impl ArithmeticEngine for NativeFloatEngine {
    fn supported() -> bool {
        true
    }

    fn name(&self) -> &str {
        "NativeFloat"
    }

    fn add(&self, lhs: &str, rhs: &str) -> NumericResult<String> {
        Self::apply("add", lhs, rhs, |a, b| a + b)
    }

    fn subtract(&self, lhs: &str, rhs: &str) -> NumericResult<String> {
        Self::apply("subtract", lhs, rhs, |a, b| a - b)
    }

    fn multiply(&self, lhs: &str, rhs: &str) -> NumericResult<String> {
        Self::apply("multiply", lhs, rhs, |a, b| a * b)
    }

    fn divide(&self, lhs: &str, rhs: &str) -> NumericResult<String> {
        let divisor = Self::operand(rhs)?;
        if divisor == 0.0 {
            return Err(NumericError::division_by_zero(lhs, rhs));
        }

        let dividend = Self::operand(lhs)?;
        Self::finish("divide", lhs, rhs, dividend / divisor)
    }

    fn absolute(&self, value: &str) -> NumericResult<String> {
        let result = Self::operand(value)?.abs();
        Self::finish("absolute", value, "", result)
    }

    fn compare(&self, lhs: &str, rhs: &str) -> NumericResult<Ordering> {
        let (a, b) = (Self::operand(lhs)?, Self::operand(rhs)?);
        a.partial_cmp(&b)
            .ok_or_else(|| NumericError::overflow("compare", lhs, rhs))
    }
}
