// ============================================================================
// Arithmetic Engine Interface
// Defines the contract for pluggable arithmetic backends
// ============================================================================

use crate::numeric::NumericResult;
use std::cmp::Ordering;

/// Strategy pattern interface for arithmetic backends
/// Implementations: ArbitraryPrecision (bigdecimal), NativeFloat (f64)
///
/// Operands are canonical numeric strings; results are normalized canonical
/// strings (no trailing fractional zeros, no bare trailing point, no `-0`).
pub trait ArithmeticEngine: Send + Sync {
    /// Whether this engine can run in the current build
    fn supported() -> bool
    where
        Self: Sized;

    /// Get the engine name for logging
    fn name(&self) -> &str;

    /// `lhs + rhs`
    fn add(&self, lhs: &str, rhs: &str) -> NumericResult<String>;

    /// `lhs - rhs`
    fn subtract(&self, lhs: &str, rhs: &str) -> NumericResult<String>;

    /// `lhs * rhs`
    fn multiply(&self, lhs: &str, rhs: &str) -> NumericResult<String>;

    /// `lhs / rhs`
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    fn divide(&self, lhs: &str, rhs: &str) -> NumericResult<String>;

    /// `|value|`
    fn absolute(&self, value: &str) -> NumericResult<String>;

    /// Numeric three-way comparison
    fn compare(&self, lhs: &str, rhs: &str) -> NumericResult<Ordering>;
}
