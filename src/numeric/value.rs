// ============================================================================
// Numeric Value
// Canonical decimal-string number with engine-backed arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult, ParseError};
use super::float_repr::canonical_from_f64;
use crate::engine::EngineSelector;
use std::cmp::Ordering;
use std::fmt;

/// Raw input accepted by [`NumericValue::parse`].
///
/// Every supported input kind converts into this type with `From`, so callers
/// normally pass integers, floats, strings or values directly.
#[derive(Debug, Clone, Copy)]
pub enum RawNumber<'a> {
    /// Signed machine integer (any width up to 128 bits)
    Int(i128),
    /// Unsigned machine integer (any width up to 128 bits)
    UInt(u128),
    /// 64-bit float
    Float(f64),
    /// Numeric text, validated against the numeric-string grammar
    Text(&'a str),
    /// Another numeric value (identity)
    Value(&'a NumericValue),
}

macro_rules! impl_raw_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for RawNumber<'_> {
            #[inline]
            fn from(value: $t) -> Self {
                RawNumber::Int(value as i128)
            }
        })*
    };
}

macro_rules! impl_raw_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for RawNumber<'_> {
            #[inline]
            fn from(value: $t) -> Self {
                RawNumber::UInt(value as u128)
            }
        })*
    };
}

impl_raw_from_signed!(i8, i16, i32, i64, i128, isize);
impl_raw_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<f64> for RawNumber<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        RawNumber::Float(value)
    }
}

impl<'a> From<&'a str> for RawNumber<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        RawNumber::Text(value)
    }
}

impl<'a> From<&'a String> for RawNumber<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        RawNumber::Text(value.as_str())
    }
}

impl<'a> From<&'a NumericValue> for RawNumber<'a> {
    #[inline]
    fn from(value: &'a NumericValue) -> Self {
        RawNumber::Value(value)
    }
}

/// Precision-preserving decimal number.
///
/// Stores a canonical decimal string and performs arithmetic through the
/// [`ArithmeticEngine`](crate::interfaces::ArithmeticEngine) chosen by an
/// [`EngineSelector`].
///
/// Text input that matches the numeric-string grammar is stored verbatim
/// (`"1337e0"`, `"000.000123"`). Results of arithmetic are normalized.
///
/// There is deliberately no `PartialEq`/`Ord`: numeric equality depends on the
/// engine, use [`compare`](Self::compare) instead.
///
/// # Example
/// ```
/// use precise_number::NumericValue;
///
/// let a = NumericValue::parse(99.75).unwrap();
/// let b = NumericValue::parse("0.25").unwrap();
/// assert_eq!(a.add(&b).unwrap().as_str(), "100");
/// ```
#[derive(Debug, Clone)]
pub struct NumericValue {
    canonical: String,
}

impl NumericValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value from any supported raw input.
    ///
    /// # Errors
    /// - `NotNumeric` for text outside the numeric-string grammar and for
    ///   non-finite floats
    pub fn parse<'a>(raw: impl Into<RawNumber<'a>>) -> Result<Self, ParseError> {
        let raw = raw.into();
        if let RawNumber::Value(value) = raw {
            return Ok(value.clone());
        }

        Self::canonicalize(raw).map(Self::from_canonical)
    }

    /// Turn raw input into its canonical string without building a value.
    pub fn canonicalize(raw: RawNumber<'_>) -> Result<String, ParseError> {
        match raw {
            RawNumber::Int(value) => Ok(value.to_string()),
            RawNumber::UInt(value) => Ok(value.to_string()),
            RawNumber::Float(value) => {
                canonical_from_f64(value).ok_or_else(|| ParseError::NotNumeric {
                    input: value.to_string(),
                })
            },
            RawNumber::Text(text) => {
                if is_numeric_literal(text) {
                    Ok(text.to_string())
                } else {
                    Err(ParseError::NotNumeric {
                        input: text.to_string(),
                    })
                }
            },
            RawNumber::Value(value) => Ok(value.canonical.clone()),
        }
    }

    /// Create from an integer.
    #[inline]
    pub fn from_int(value: i64) -> Self {
        Self::from_canonical(value.to_string())
    }

    /// Create from a float.
    ///
    /// # Errors
    /// Returns `NotNumeric` for NaN and infinities.
    pub fn from_float(value: f64) -> Result<Self, ParseError> {
        Self::parse(value)
    }

    /// Zero.
    #[inline]
    pub fn zero() -> Self {
        Self::from_canonical("0".to_string())
    }

    /// Wrap a string that is already known to satisfy the grammar.
    #[inline]
    pub(crate) fn from_canonical(canonical: String) -> Self {
        debug_assert!(is_numeric_literal(&canonical), "{canonical:?}");
        Self { canonical }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The canonical decimal string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Consume the value, returning its canonical string.
    #[inline]
    pub fn into_string(self) -> String {
        self.canonical
    }

    /// Integer part, truncated toward zero.
    ///
    /// Computed on the canonical string, so the result does not depend on
    /// which engine produced the value.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer part does not fit in an `i64`.
    pub fn to_integer(&self) -> NumericResult<i64> {
        truncate_to_integer(&self.canonical).ok_or_else(|| NumericError::Overflow {
            operation: "to_integer",
            operands: self.canonical.clone(),
        })
    }

    // ========================================================================
    // Arithmetic (process-wide engine)
    // ========================================================================

    /// Sum of this value and `addend`.
    pub fn add(&self, addend: &NumericValue) -> NumericResult<NumericValue> {
        self.add_using(addend, EngineSelector::global())
    }

    /// Difference of this value and `subtrahend`.
    pub fn subtract(&self, subtrahend: &NumericValue) -> NumericResult<NumericValue> {
        self.subtract_using(subtrahend, EngineSelector::global())
    }

    /// Product of this value and `multiplier`.
    pub fn multiply(&self, multiplier: &NumericValue) -> NumericResult<NumericValue> {
        self.multiply_using(multiplier, EngineSelector::global())
    }

    /// Quotient of this value and `divisor`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn divide(&self, divisor: &NumericValue) -> NumericResult<NumericValue> {
        self.divide_using(divisor, EngineSelector::global())
    }

    /// Absolute value.
    pub fn absolute(&self) -> NumericResult<NumericValue> {
        self.absolute_using(EngineSelector::global())
    }

    /// Numeric comparison (`Less`, `Equal`, `Greater`).
    pub fn compare(&self, other: &NumericValue) -> NumericResult<Ordering> {
        self.compare_using(other, EngineSelector::global())
    }

    /// Whether this value compares equal to zero.
    pub fn is_zero(&self) -> NumericResult<bool> {
        self.is_zero_using(EngineSelector::global())
    }

    /// Negated value (`0 - self`).
    pub fn negative(&self) -> NumericResult<NumericValue> {
        self.negative_using(EngineSelector::global())
    }

    // ========================================================================
    // Arithmetic (explicit selector)
    // ========================================================================

    pub fn add_using(
        &self,
        addend: &NumericValue,
        selector: &EngineSelector,
    ) -> NumericResult<NumericValue> {
        let engine = selector.engine()?;
        engine
            .add(&self.canonical, &addend.canonical)
            .map(Self::from_canonical)
    }

    pub fn subtract_using(
        &self,
        subtrahend: &NumericValue,
        selector: &EngineSelector,
    ) -> NumericResult<NumericValue> {
        let engine = selector.engine()?;
        engine
            .subtract(&self.canonical, &subtrahend.canonical)
            .map(Self::from_canonical)
    }

    pub fn multiply_using(
        &self,
        multiplier: &NumericValue,
        selector: &EngineSelector,
    ) -> NumericResult<NumericValue> {
        let engine = selector.engine()?;
        engine
            .multiply(&self.canonical, &multiplier.canonical)
            .map(Self::from_canonical)
    }

    pub fn divide_using(
        &self,
        divisor: &NumericValue,
        selector: &EngineSelector,
    ) -> NumericResult<NumericValue> {
        let engine = selector.engine()?;
        engine
            .divide(&self.canonical, &divisor.canonical)
            .map(Self::from_canonical)
    }

    pub fn absolute_using(&self, selector: &EngineSelector) -> NumericResult<NumericValue> {
        let engine = selector.engine()?;
        engine.absolute(&self.canonical).map(Self::from_canonical)
    }

    pub fn compare_using(
        &self,
        other: &NumericValue,
        selector: &EngineSelector,
    ) -> NumericResult<Ordering> {
        let engine = selector.engine()?;
        engine.compare(&self.canonical, &other.canonical)
    }

    pub fn is_zero_using(&self, selector: &EngineSelector) -> NumericResult<bool> {
        Ok(self.compare_using(&Self::zero(), selector)? == Ordering::Equal)
    }

    pub fn negative_using(&self, selector: &EngineSelector) -> NumericResult<NumericValue> {
        Self::zero().subtract_using(self, selector)
    }
}

// ============================================================================
// Numeric-String Grammar
// ============================================================================

/// Check `-? DIGITS ( '.' DIGITS )? ( [eE] [+-]? DIGITS )?`.
///
/// No whitespace, no leading `+`, no radix prefixes.
pub(crate) fn is_numeric_literal(text: &str) -> bool {
    fn digits(bytes: &[u8], mut pos: usize) -> usize {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    }

    let bytes = text.as_bytes();
    let mut pos = 0;

    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    let end = digits(bytes, pos);
    if end == pos {
        return false;
    }
    pos = end;

    if bytes.get(pos) == Some(&b'.') {
        let end = digits(bytes, pos + 1);
        if end == pos + 1 {
            return false;
        }
        pos = end;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let end = digits(bytes, pos);
        if end == pos {
            return false;
        }
        pos = end;
    }

    pos == bytes.len()
}

/// Truncate a grammar-valid literal toward zero.
///
/// Works on the digits directly so any exponent is handled without
/// materializing the full expansion. Returns `None` when the integer part does
/// not fit in an `i64`.
fn truncate_to_integer(literal: &str) -> Option<i64> {
    /// Digits in `u64::MAX`
    const MAX_DIGITS: i64 = 20;

    let (negative, body) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => {
            let exp = &body[idx + 1..];
            // Saturate exponents beyond i64; the magnitude decides the outcome
            let exp = exp.parse::<i64>().unwrap_or(if exp.starts_with('-') {
                i64::MIN / 2
            } else {
                i64::MAX / 2
            });
            (&body[..idx], exp)
        },
        None => (body, 0),
    };

    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits: String = [int_digits, frac_digits].concat();

    let leading_zeros = digits.bytes().take_while(|b| *b == b'0').count();
    let significant = &digits[leading_zeros..];
    if significant.is_empty() {
        return Some(0);
    }

    // Decimal point position relative to the first significant digit
    let point = int_digits.len() as i64 - leading_zeros as i64 + exponent;
    if point <= 0 {
        return Some(0);
    }
    if point > MAX_DIGITS {
        return None;
    }

    let point = point as usize;
    let whole = if point <= significant.len() {
        significant[..point].to_string()
    } else {
        format!("{significant:0<point$}")
    };

    let magnitude = whole.parse::<u64>().ok()? as i128;
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).ok()
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for NumericValue {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.canonical)
    }
}

impl AsRef<str> for NumericValue {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl std::str::FromStr for NumericValue {
    type Err = ParseError;

    /// Parse numeric text, keeping it verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for NumericValue {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<f64> for NumericValue {
    type Error = ParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

macro_rules! impl_value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for NumericValue {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from_canonical(value.to_string())
            }
        })*
    };
}

impl_value_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
