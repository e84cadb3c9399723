// ============================================================================
// Float Representation
// Canonical decimal strings for f64 values and result normalization
// ============================================================================

use std::borrow::Cow;

/// Largest decimal-point position printed in fixed notation.
///
/// Values at or above `1e17` switch to scientific notation, as do values
/// below `1e-4`.
const MAX_FIXED_POINT: i32 = 17;

/// Smallest decimal-point position printed in fixed notation.
const MIN_FIXED_POINT: i32 = -3;

/// Render an `f64` as the shortest decimal string that parses back to the
/// same value.
///
/// Returns `None` for NaN and infinities. Negative zero renders as `"0"`.
///
/// # Examples
/// - `0.1` -> `"0.1"`
/// - `99.75` -> `"99.75"`
/// - `0.000017` -> `"1.7e-5"`
/// - `1e20` -> `"1e20"`
pub(crate) fn canonical_from_f64(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    if value == 0.0 {
        return Some("0".to_string());
    }

    // `{:e}` yields the shortest round-tripping digits in scientific form
    let scientific = format!("{value:e}");
    let exponent: i32 = scientific
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse().ok())?;

    // Position of the decimal point for 0.d1d2... x 10^point
    let point = exponent + 1;

    if !(MIN_FIXED_POINT..=MAX_FIXED_POINT).contains(&point) {
        return Some(scientific);
    }

    Some(normalize(&format!("{value}")).into_owned())
}

/// Strip trailing fractional zeros and a bare trailing decimal point.
///
/// Strings without a decimal point, or in exponential notation, are returned
/// unchanged.
///
/// # Examples
/// - `"100.0000"` -> `"100"`
/// - `"2500.750"` -> `"2500.75"`
/// - `"1000"` -> `"1000"`
pub fn normalize(value: &str) -> Cow<'_, str> {
    if !value.contains('.') || value.contains(['e', 'E']) {
        return Cow::Borrowed(value);
    }

    let trimmed = value.trim_end_matches('0').trim_end_matches('.');
    Cow::Borrowed(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(canonical_from_f64(0.1).as_deref(), Some("0.1"));
        assert_eq!(canonical_from_f64(99.75).as_deref(), Some("99.75"));
        assert_eq!(canonical_from_f64(100.0).as_deref(), Some("100"));
        assert_eq!(canonical_from_f64(-2500.75).as_deref(), Some("-2500.75"));
        assert_eq!(canonical_from_f64(0.00037).as_deref(), Some("0.00037"));
        assert_eq!(canonical_from_f64(0.0001).as_deref(), Some("0.0001"));
        assert_eq!(
            canonical_from_f64(1e16).as_deref(),
            Some("10000000000000000")
        );
    }

    #[test]
    fn test_full_precision_is_kept() {
        assert_eq!(
            canonical_from_f64(0.1 + 0.2).as_deref(),
            Some("0.30000000000000004")
        );
        assert_eq!(
            canonical_from_f64(1.0 / 3.0).as_deref(),
            Some("0.3333333333333333")
        );
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(canonical_from_f64(0.000017).as_deref(), Some("1.7e-5"));
        assert_eq!(canonical_from_f64(-0.000017).as_deref(), Some("-1.7e-5"));
        assert_eq!(canonical_from_f64(1e17).as_deref(), Some("1e17"));
        assert_eq!(canonical_from_f64(1.5e300).as_deref(), Some("1.5e300"));
    }

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(canonical_from_f64(0.0).as_deref(), Some("0"));
        assert_eq!(canonical_from_f64(-0.0).as_deref(), Some("0"));
        assert_eq!(canonical_from_f64(f64::NAN), None);
        assert_eq!(canonical_from_f64(f64::INFINITY), None);
        assert_eq!(canonical_from_f64(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("100.0000"), "100");
        assert_eq!(normalize("0.30000000000000"), "0.3");
        assert_eq!(normalize("2500."), "2500");
        assert_eq!(normalize("1000"), "1000");
        assert_eq!(normalize("1.50e10"), "1.50e10");
        assert!(matches!(normalize("1000"), Cow::Borrowed("1000")));
    }

    proptest! {
        #[test]
        fn prop_round_trips(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
            let canonical = canonical_from_f64(value).unwrap();
            let reparsed: f64 = canonical.parse().unwrap();
            // -0.0 canonicalizes to "0"
            prop_assert!(reparsed == value);
        }

        #[test]
        fn prop_no_trailing_zeros_in_fraction(value in -1e12f64..1e12f64) {
            let canonical = canonical_from_f64(value).unwrap();
            if canonical.contains('.') && !canonical.contains('e') {
                prop_assert!(!canonical.ends_with('0'));
                prop_assert!(!canonical.ends_with('.'));
            }
        }
    }
}
