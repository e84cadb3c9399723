// ============================================================================
// Number Format
// Locale separators for parsing and display
// ============================================================================

use crate::interfaces::{LocaleProvider, NumberFormatter};
use crate::numeric::NumericValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal and thousands separators of a locale.
///
/// The simplest [`LocaleProvider`] and [`NumberFormatter`]: it supplies its
/// decimal point to the parser and formats with plain separator substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormat {
    /// Decimal separator; empty means "no locale preference"
    pub decimal_point: String,

    /// Thousands separator; may be empty
    pub thousands_sep: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

impl NumberFormat {
    pub fn new(decimal_point: impl Into<String>, thousands_sep: impl Into<String>) -> Self {
        Self {
            decimal_point: decimal_point.into(),
            thousands_sep: thousands_sep.into(),
        }
    }

    /// `1,234.56`
    pub fn en_us() -> Self {
        Self::new(".", ",")
    }

    /// `1.234,56`
    pub fn nl_nl() -> Self {
        Self::new(",", ".")
    }

    /// `1 234,56` (narrow no-break space)
    pub fn fr_fr() -> Self {
        Self::new(",", "\u{202f}")
    }
}

impl LocaleProvider for NumberFormat {
    fn decimal_separator(&self) -> Option<&str> {
        Some(self.decimal_point.as_str()).filter(|sep| !sep.is_empty())
    }
}

impl NumberFormatter for NumberFormat {
    fn format_number(&self, value: &str, decimals: u32) -> String {
        match NumericValue::parse(value) {
            Ok(number) => number.render(decimals, &self.decimal_point, &self.thousands_sep),
            Err(_) => value.to_string(),
        }
    }
}
