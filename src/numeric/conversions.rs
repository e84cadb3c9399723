// ============================================================================
// Decimal Conversions
// Interop with rust_decimal and bigdecimal
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::float_repr::normalize;
use super::value::NumericValue;
use crate::engine::{parse_big_decimal, to_plain_string};
use bigdecimal::BigDecimal;
use rust_decimal::Decimal;

impl NumericValue {
    /// The exact value as a [`BigDecimal`].
    pub fn to_big_decimal(&self) -> NumericResult<BigDecimal> {
        Ok(parse_big_decimal(self.as_str())?)
    }

    /// The value as a [`Decimal`].
    ///
    /// # Errors
    /// Returns `Overflow` when the value does not fit the 96-bit mantissa
    /// without losing digits.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let plain = to_plain_string(&self.to_big_decimal()?);
        Decimal::from_str_exact(&normalize(&plain)).map_err(|_| NumericError::Overflow {
            operation: "to_decimal",
            operands: self.as_str().to_string(),
        })
    }
}

impl From<Decimal> for NumericValue {
    fn from(value: Decimal) -> Self {
        Self::from_canonical(value.to_string())
    }
}

impl From<&BigDecimal> for NumericValue {
    fn from(value: &BigDecimal) -> Self {
        Self::from_canonical(to_plain_string(value))
    }
}

impl From<BigDecimal> for NumericValue {
    fn from(value: BigDecimal) -> Self {
        Self::from(&value)
    }
}

impl TryFrom<&NumericValue> for Decimal {
    type Error = NumericError;

    fn try_from(value: &NumericValue) -> Result<Self, Self::Error> {
        value.to_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_decimal_keeps_scale() {
        let price = Decimal::from_str("99.7500").unwrap();
        assert_eq!(NumericValue::from(price).as_str(), "99.7500");
        assert_eq!(NumericValue::from(Decimal::from(-42)).as_str(), "-42");
    }

    #[test]
    fn test_to_decimal() {
        let value = NumericValue::parse("1.7e-5").unwrap();
        assert_eq!(value.to_decimal().unwrap(), Decimal::from_str("0.000017").unwrap());

        let value = NumericValue::parse("-2500.75").unwrap();
        assert_eq!(Decimal::try_from(&value).unwrap(), Decimal::from_str("-2500.75").unwrap());
    }

    #[test]
    fn test_to_decimal_rejects_lossy_values() {
        for literal in ["340282366920938463463374607431768211455", "1e40"] {
            let value = NumericValue::parse(literal).unwrap();
            assert!(matches!(
                value.to_decimal(),
                Err(NumericError::Overflow { operation: "to_decimal", .. })
            ));
        }
    }

    #[test]
    fn test_big_decimal_round_trip() {
        let value = NumericValue::parse("123456789012345678901234567890.000000000000000001").unwrap();
        let big = value.to_big_decimal().unwrap();
        assert_eq!(NumericValue::from(&big).as_str(), value.as_str());

        let big = BigDecimal::from_str("1e3").unwrap();
        assert_eq!(NumericValue::from(big).as_str(), "1000");
    }
}
