// ============================================================================
// Display Formatting
// Fixed-decimals rendering with custom separators
// ============================================================================

use super::value::NumericValue;
use crate::engine::{parse_big_decimal, to_plain_string};
use crate::interfaces::NumberFormatter;
use bigdecimal::RoundingMode;

/// Digits between thousands separators
const GROUP_SIZE: usize = 3;

impl NumericValue {
    /// Format for display with a fixed number of decimals.
    ///
    /// Rounds half away from zero, groups the integer digits in threes and
    /// never prints a negative zero. The value itself is not changed.
    ///
    /// # Example
    /// ```
    /// use precise_number::NumericValue;
    ///
    /// let x = NumericValue::parse("1234567.891").unwrap();
    /// assert_eq!(x.render(2, ",", "."), "1.234.567,89");
    /// ```
    pub fn render(
        &self,
        decimals: u32,
        decimal_separator: &str,
        thousands_separator: &str,
    ) -> String {
        let fixed = fixed_point(self.as_str(), decimals);

        let (negative, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, fixed.as_str()),
        };
        let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let groups = int_digits.len() / GROUP_SIZE;
        let mut out = String::with_capacity(fixed.len() + groups * thousands_separator.len());
        if negative {
            out.push('-');
        }
        for (idx, ch) in int_digits.chars().enumerate() {
            if idx > 0 && (int_digits.len() - idx) % GROUP_SIZE == 0 {
                out.push_str(thousands_separator);
            }
            out.push(ch);
        }
        if decimals > 0 {
            out.push_str(decimal_separator);
            out.push_str(frac_digits);
        }
        out
    }

    /// Format through a locale-aware number formatter.
    pub fn format_localized(&self, decimals: u32, formatter: &dyn NumberFormatter) -> String {
        formatter.format_number(self.as_str(), decimals)
    }
}

/// Round `literal` to `decimals` places and print it with exactly that many
/// fractional digits, `.` as separator and no grouping.
fn fixed_point(literal: &str, decimals: u32) -> String {
    match parse_big_decimal(literal) {
        Ok(value) => {
            to_plain_string(&value.with_scale_round(i64::from(decimals), RoundingMode::HalfUp))
        },
        Err(_) => literal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NumberFormat;

    fn value(literal: &str) -> NumericValue {
        NumericValue::parse(literal).unwrap()
    }

    #[test]
    fn test_render_defaults() {
        assert_eq!(value("1234.5").render(0, ".", ","), "1,235");
        assert_eq!(value("1234.5").render(2, ".", ","), "1,234.50");
        assert_eq!(value("-1234567.891").render(2, ".", ","), "-1,234,567.89");
        assert_eq!(value("999").render(0, ".", ","), "999");
        assert_eq!(value("100000").render(0, ".", ","), "100,000");
    }

    #[test]
    fn test_render_custom_separators() {
        assert_eq!(value("2500.75").render(2, ",", "."), "2.500,75");
        assert_eq!(value("2500.75").render(2, ",", ""), "2500,75");
        assert_eq!(value("1234567").render(1, ".", " "), "1 234 567.0");
    }

    #[test]
    fn test_render_rounding() {
        assert_eq!(value("0.125").render(2, ".", ","), "0.13");
        assert_eq!(value("-0.125").render(2, ".", ","), "-0.13");
        assert_eq!(value("2.4999").render(0, ".", ","), "2");
        assert_eq!(value("-0.001").render(2, ".", ","), "0.00");
    }

    #[test]
    fn test_render_exponential_and_huge() {
        assert_eq!(value("1337e0").render(0, ".", ","), "1,337");
        assert_eq!(value("1.7e-5").render(6, ".", ","), "0.000017");
        assert_eq!(
            value("1e30").render(0, ".", ""),
            format!("1{}", "0".repeat(30))
        );
        assert_eq!(
            value("123456789012345678901234567890.125").render(2, ".", ","),
            "123,456,789,012,345,678,901,234,567,890.13"
        );

        let huge = value("1e400").render(2, ".", "");
        assert_eq!(huge, format!("1{}.00", "0".repeat(400)));
        assert_eq!(
            value("-1e400").render(0, ".", ",").len(),
            1 + 401 + 133
        );
    }

    #[test]
    fn test_render_does_not_change_value() {
        let x = value("000.000123");
        let _ = x.render(2, ".", ",");
        assert_eq!(x.as_str(), "000.000123");
    }

    #[test]
    fn test_format_localized() {
        let dutch = NumberFormat::nl_nl();
        assert_eq!(value("1250.75").format_localized(2, &dutch), "1.250,75");
        assert_eq!(
            value("1250.75").format_localized(0, &NumberFormat::en_us()),
            "1,251"
        );
    }
}
