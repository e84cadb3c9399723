// ============================================================================
// Locale Number Parser
// Heuristic parsing of locale-formatted numeric text
// ============================================================================

use crate::interfaces::LocaleProvider;
use crate::numeric::{NumericValue, ParseError};
use arrayvec::ArrayVec;

/// Glyphs that mean "no minor units" after a decimal separator (`€ 5,-`)
const NO_MINOR_UNITS: [&str; 3] = ["-", "\u{2013}", "\u{2014}"];

/// Separators recognized regardless of locale
const COMMON_SEPARATORS: [&str; 2] = [".", ","];

/// Parses free-form numeric text such as `"EUR -1.250,75"`, `"2.500,75-"`,
/// `"2,-"` or `"0,000017 BTC"`.
///
/// The decimal separator of a given input is guessed from the characters near
/// its end, falling back to the locale's separator. Thousands separators,
/// currency codes and unit suffixes are discarded.
///
/// # Example
/// ```
/// use precise_number::parser::LocaleNumberParser;
///
/// let parser = LocaleNumberParser::new(",");
/// assert_eq!(parser.parse("2.500,75-").unwrap().as_str(), "-2500.75");
/// assert_eq!(parser.parse("0,000017 BTC").unwrap().as_str(), "1.7e-5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleNumberParser {
    /// Locale decimal separator; `None` when the locale has no preference
    decimal_separator: Option<String>,
}

impl LocaleNumberParser {
    /// Create a parser for a locale using `decimal_separator`.
    ///
    /// An empty separator means "no locale preference".
    pub fn new(decimal_separator: impl Into<String>) -> Self {
        let separator = decimal_separator.into();
        Self {
            decimal_separator: Some(separator).filter(|sep| !sep.is_empty()),
        }
    }

    /// Create a parser using the separator supplied by a locale provider.
    pub fn from_locale(locale: &dyn LocaleProvider) -> Self {
        Self::new(locale.decimal_separator().unwrap_or_default())
    }

    /// The locale decimal separator, if any.
    pub fn decimal_separator(&self) -> Option<&str> {
        self.decimal_separator.as_deref()
    }

    /// Parse `text` into a numeric value.
    ///
    /// # Errors
    /// Returns `Unparseable` when the normalized literal is not a finite float.
    pub fn parse(&self, text: &str) -> Result<NumericValue, ParseError> {
        let literal = self.to_literal(text);

        let value = literal
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseError::Unparseable {
                input: text.to_string(),
                literal: literal.clone(),
            })?;

        tracing::trace!(input = text, literal = %literal, "Parsed locale number");
        NumericValue::parse(value)
    }

    /// Rewrite locale text as a plain float literal (`"2.500,75-"` ->
    /// `"-2500.75"`). The result is not validated.
    pub fn to_literal(&self, text: &str) -> String {
        let candidates = self.candidates();
        let chars: Vec<char> = text.chars().collect();

        let split = self
            .split_position(text, &chars, &candidates)
            .map(|(idx, len)| (&text[..idx], &text[idx + len..]));

        match split {
            Some((full, half)) => {
                let half = if NO_MINOR_UNITS.contains(&half) { "" } else { half };
                let (negative, half) = match half.strip_suffix('-') {
                    Some(rest) => (true, rest),
                    None => (false, half),
                };

                let full = keep_number_chars(full);
                let half = keep_number_chars(half);
                let sign = if negative { "-" } else { "" };

                format!("{sign}{full}.{half}")
            },
            None => match text.strip_suffix('-') {
                Some(rest) => format!("-{}", keep_number_chars(rest)),
                None => keep_number_chars(text),
            },
        }
    }

    /// Locale separator plus `.` and `,`, deduplicated.
    fn candidates(&self) -> ArrayVec<&str, 3> {
        let mut candidates = ArrayVec::new();
        for sep in self.decimal_separator().into_iter().chain(COMMON_SEPARATORS) {
            if !candidates.contains(&sep) {
                candidates.push(sep);
            }
        }
        candidates
    }

    /// Byte index and byte length of the decimal separator in `text`.
    fn split_position(
        &self,
        text: &str,
        chars: &[char],
        candidates: &[&str],
    ) -> Option<(usize, usize)> {
        let is_candidate = |c: &char| {
            let mut buf = [0u8; 4];
            candidates.contains(&&*c.encode_utf8(&mut buf))
        };
        let last_of = |c: char| text.rfind(c).map(|idx| (idx, c.len_utf8()));

        // Short fractional parts and trailing suffixes put the separator here
        if let Some(sep) = [3, 2]
            .into_iter()
            .filter_map(|n| char_from_end(chars, n))
            .find(is_candidate)
        {
            tracing::trace!(separator = %sep, "Decimal separator detected near end of input");
            return last_of(sep);
        }

        if let Some(sep) = self.decimal_separator() {
            if let Some(idx) = text.rfind(sep) {
                return Some((idx, sep.len()));
            }
        }

        // Trailing-minus negatives shift everything by one (`2.500,75-`)
        if text.ends_with('-') {
            if let Some(sep) = char_from_end(chars, 4).filter(is_candidate) {
                return last_of(sep);
            }
        }

        None
    }
}

/// The `n`-th character from the end; offsets past the start clamp to the
/// first character.
fn char_from_end(chars: &[char], n: usize) -> Option<char> {
    if chars.is_empty() {
        return None;
    }
    chars.get(chars.len().saturating_sub(n)).copied()
}

/// Keep ASCII digits and sign characters.
fn keep_number_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '+')
        .collect()
}
