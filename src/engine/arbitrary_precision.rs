// ============================================================================
// Arbitrary-Precision Engine
// Unbounded decimal arithmetic on bigdecimal, truncating at the scale
// ============================================================================

use crate::domain::DEFAULT_SCALE;
use crate::interfaces::ArithmeticEngine;
use crate::numeric::{normalize, NumericError, NumericResult, ParseError};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::cmp::Ordering;
use std::str::FromStr;

/// Decimal arithmetic at a fixed working scale.
///
/// Operands are read exactly, whatever their magnitude or digit count. Every
/// operation is computed exactly, then excess fractional digits beyond
/// `scale` are truncated (never rounded), e.g. `1 / 3` at scale 14 is
/// `0.33333333333333` and `2 / 3` is `0.66666666666666`.
#[derive(Debug, Clone, Copy)]
pub struct ArbitraryPrecisionEngine {
    scale: u32,
}

impl ArbitraryPrecisionEngine {
    /// Create an engine with the given working scale.
    #[inline]
    pub fn new(scale: u32) -> Self {
        Self { scale }
    }

    /// The working scale (fractional digits kept).
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn operands(lhs: &str, rhs: &str) -> NumericResult<(BigDecimal, BigDecimal)> {
        Ok((parse_big_decimal(lhs)?, parse_big_decimal(rhs)?))
    }

    fn truncate(&self, value: &BigDecimal) -> BigDecimal {
        value.with_scale_round(i64::from(self.scale), RoundingMode::Down)
    }

    /// Truncate to the working scale and render as a normalized string.
    fn finish(&self, value: &BigDecimal) -> String {
        normalize(&to_plain_string(&self.truncate(value))).into_owned()
    }
}

impl Default for ArbitraryPrecisionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

impl ArithmeticEngine for ArbitraryPrecisionEngine {
    fn supported() -> bool {
        cfg!(feature = "arbitrary-precision")
    }

    fn name(&self) -> &str {
        "ArbitraryPrecision"
    }

    fn add(&self, lhs: &str, rhs: &str) -> NumericResult<String> {
        let (a, b) = Self::operands(lhs, rhs)?;
        Ok(self.finish(&(a + b)))
    }

    fn subtract(&self, lhs: &str, rhs: &str) -> NumericResult<String> {
        let (a, b) = Self::operands(lhs, rhs)?;
        Ok(self.finish(&(a - b)))
    }

    fn multiply(&self, lhs: &str, rhs: &str) -> NumericResult<String> {
        let (a, b) = Self::operands(lhs, rhs)?;
        Ok(self.finish(&(a * b)))
    }

    fn divide(&self, lhs: &str, rhs: &str) -> NumericResult<String> {
        let (a, b) = Self::operands(lhs, rhs)?;
        if b.is_zero() {
            return Err(NumericError::division_by_zero(lhs, rhs));
        }

        let quotient = truncating_div(&a, &b, i64::from(self.scale));
        Ok(normalize(&to_plain_string(&quotient)).into_owned())
    }

    fn absolute(&self, value: &str) -> NumericResult<String> {
        Ok(value.strip_prefix('-').unwrap_or(value).to_string())
    }

    fn compare(&self, lhs: &str, rhs: &str) -> NumericResult<Ordering> {
        let (a, b) = Self::operands(lhs, rhs)?;
        Ok(self.truncate(&a).cmp(&self.truncate(&b)))
    }
}

/// `lhs / rhs` truncated toward zero at `scale` fractional digits.
///
/// Done on the unscaled integers so no intermediate precision limit applies.
fn truncating_div(lhs: &BigDecimal, rhs: &BigDecimal, scale: i64) -> BigDecimal {
    let (lhs_digits, lhs_scale) = lhs.as_bigint_and_exponent();
    let (rhs_digits, rhs_scale) = rhs.as_bigint_and_exponent();

    // lhs / rhs = (lhs_digits / rhs_digits) * 10^(rhs_scale - lhs_scale)
    let shift = rhs_scale - lhs_scale + scale;
    let (numerator, denominator) = if shift >= 0 {
        (lhs_digits * pow10(shift), rhs_digits)
    } else {
        (lhs_digits, rhs_digits * pow10(-shift))
    };

    // BigInt division truncates toward zero
    BigDecimal::new(numerator / denominator, scale)
}

fn pow10(exponent: i64) -> BigInt {
    let exponent = u32::try_from(exponent).unwrap_or(u32::MAX);
    BigInt::from(10u8).pow(exponent)
}

/// Parse a canonical numeric string, including exponential forms.
pub(crate) fn parse_big_decimal(literal: &str) -> Result<BigDecimal, ParseError> {
    BigDecimal::from_str(literal).map_err(|_| ParseError::NotNumeric {
        input: literal.to_string(),
    })
}

/// Render without exponent, keeping exactly the value's scale.
///
/// `1e3` -> `"1000"`, `-1.50` at scale 2 -> `"-1.50"`, zero never has a sign.
pub(crate) fn to_plain_string(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    let magnitude = digits.magnitude().to_string();

    let body = if scale <= 0 {
        format!("{magnitude}{}", "0".repeat(scale.unsigned_abs() as usize))
    } else {
        let scale = scale as usize;
        let padded = format!("{magnitude:0>width$}", width = scale + 1);
        let (int_digits, frac_digits) = padded.split_at(padded.len() - scale);
        format!("{int_digits}.{frac_digits}")
    };

    if digits.sign() == Sign::Minus {
        format!("-{body}")
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ArbitraryPrecisionEngine {
        ArbitraryPrecisionEngine::default()
    }

    #[test]
    fn test_supported_follows_feature() {
        assert_eq!(
            ArbitraryPrecisionEngine::supported(),
            cfg!(feature = "arbitrary-precision")
        );
    }

    #[test]
    fn test_basic_operations() {
        let e = engine();
        assert_eq!(e.add("99.75", "0.25").unwrap(), "100");
        assert_eq!(e.subtract("100", "0.25").unwrap(), "99.75");
        assert_eq!(e.multiply("100", "0.25").unwrap(), "25");
        assert_eq!(e.divide("100", "4").unwrap(), "25");
    }

    #[test]
    fn test_exact_decimal_addition() {
        assert_eq!(engine().add("0.1", "0.2").unwrap(), "0.3");
        assert_eq!(engine().add("100.0000", "1").unwrap(), "101");
    }

    #[test]
    fn test_beyond_i64() {
        assert_eq!(
            engine()
                .add("9223372036854775807", "9223372036854775807")
                .unwrap(),
            "18446744073709551614"
        );
    }

    #[test]
    fn test_beyond_96_bit_range() {
        let e = engine();
        assert_eq!(
            e.add("123456789012345678901234567890", "1").unwrap(),
            "123456789012345678901234567891"
        );
        assert_eq!(
            e.add("340282366920938463463374607431768211455", "1").unwrap(),
            "340282366920938463463374607431768211456"
        );
        assert_eq!(
            e.multiply(
                "99999999999999999999999999999999",
                "99999999999999999999999999999999"
            )
            .unwrap(),
            "9999999999999999999999999999999800000000000000000000000000000001"
        );
        assert_eq!(
            e.multiply("987654321098765432109876543210.123456789", "1000000000000000000000.5")
                .unwrap(),
            "987654321098765432110370370370672839505054938271605.0617283945"
        );
        assert_eq!(
            e.divide("123456789012345678901234567890", "7").unwrap(),
            "17636684144620811271604938270"
        );
        assert_eq!(
            e.divide("1e40", "3").unwrap(),
            "3333333333333333333333333333333333333333.33333333333333"
        );
        assert_eq!(e.add("1e40", "0").unwrap(), format!("1{}", "0".repeat(40)));
    }

    #[test]
    fn test_many_digit_operands_are_not_rounded() {
        let e = engine();
        assert_eq!(
            e.add("1234567890123456.99999999999999", "0").unwrap(),
            "1234567890123456.99999999999999"
        );
        assert_eq!(
            e.compare("1234567890123456.99999999999999", "1234567890123457")
                .unwrap(),
            Ordering::Less
        );
        assert_eq!(
            e.add("0.123456789012345678901234567890", "0").unwrap(),
            "0.12345678901234"
        );
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        let e = engine();
        assert_eq!(e.divide("1", "3").unwrap(), "0.33333333333333");
        assert_eq!(e.divide("2", "3").unwrap(), "0.66666666666666");
        assert_eq!(e.divide("-2", "3").unwrap(), "-0.66666666666666");
        assert_eq!(
            e.multiply("0.000000001", "0.000000009").unwrap(),
            "0"
        );

        let coarse = ArbitraryPrecisionEngine::new(2);
        assert_eq!(coarse.divide("10", "3").unwrap(), "3.33");
        assert_eq!(coarse.multiply("1.239", "1").unwrap(), "1.23");
        assert_eq!(coarse.multiply("-1.239", "1").unwrap(), "-1.23");

        let fine = ArbitraryPrecisionEngine::new(40);
        assert_eq!(
            fine.divide("1", "3").unwrap(),
            format!("0.{}", "3".repeat(40))
        );
    }

    #[test]
    fn test_exponential_operands() {
        let e = engine();
        assert_eq!(e.add("1337e0", "0").unwrap(), "1337");
        assert_eq!(e.multiply("1.7e-5", "1E+5").unwrap(), "1.7");
        assert_eq!(e.add("000.000123", "0").unwrap(), "0.000123");
        assert_eq!(e.divide("1e-5", "1e5").unwrap(), "0.0000000001");
    }

    #[test]
    fn test_division_by_zero() {
        for zero in ["0", "0.000", "-0", "0e10"] {
            assert_eq!(
                engine().divide("100", zero).unwrap_err(),
                NumericError::division_by_zero("100", zero)
            );
        }
        assert_eq!(
            engine().divide("1e40", "0").unwrap_err(),
            NumericError::division_by_zero("1e40", "0")
        );
    }

    #[test]
    fn test_absolute() {
        let e = engine();
        assert_eq!(e.absolute("-100").unwrap(), "100");
        assert_eq!(e.absolute("100").unwrap(), "100");
        assert_eq!(e.absolute("-1.50").unwrap(), "1.50");
    }

    #[test]
    fn test_compare() {
        let e = engine();
        assert_eq!(e.compare("-100", "-100.0").unwrap(), Ordering::Equal);
        assert_eq!(e.compare("1", "2").unwrap(), Ordering::Less);
        assert_eq!(e.compare("2", "1").unwrap(), Ordering::Greater);
        assert_eq!(e.compare("1337e0", "1337").unwrap(), Ordering::Equal);
        assert_eq!(e.compare("1e40", "1e40").unwrap(), Ordering::Equal);
        assert_eq!(
            e.compare("1e40", &"9".repeat(40)).unwrap(),
            Ordering::Greater
        );
        // Differences beyond the working scale are invisible
        assert_eq!(
            e.compare("0.000000000000001", "0").unwrap(),
            Ordering::Equal
        );
    }

    #[test]
    fn test_zero_result_has_no_sign() {
        assert_eq!(engine().subtract("0", "0").unwrap(), "0");
        assert_eq!(engine().multiply("-1", "0").unwrap(), "0");
        assert_eq!(engine().multiply("-0.000000000000001", "1").unwrap(), "0");
    }

    #[test]
    fn test_plain_string() {
        let plain = |s: &str| to_plain_string(&parse_big_decimal(s).unwrap());
        assert_eq!(plain("1e3"), "1000");
        assert_eq!(plain("-1.50"), "-1.50");
        assert_eq!(plain("1.7e-5"), "0.000017");
        assert_eq!(plain("-0.00"), "0.00");
        assert_eq!(plain("42"), "42");
    }

    #[test]
    fn test_invalid_operand() {
        assert!(matches!(
            engine().add("abc", "1"),
            Err(NumericError::Parse(ParseError::NotNumeric { .. }))
        ));
    }
}
