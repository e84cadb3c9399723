// ============================================================================
// Locale Interfaces
// Contracts for the locale collaborators used by parsing and display
// ============================================================================

/// Source of the active decimal separator
pub trait LocaleProvider: Send + Sync {
    /// The locale's decimal separator, or `None` when it has no preference
    fn decimal_separator(&self) -> Option<&str>;
}

/// Locale-aware "format number" routine
/// Implementations can wrap ICU, a CMS formatter, or plain separators
pub trait NumberFormatter: Send + Sync {
    /// Format a canonical numeric string with `decimals` fractional digits
    fn format_number(&self, value: &str, decimals: u32) -> String;
}
