// ============================================================================
// Parser Module
// Locale-aware extraction of numbers from human-entered text
// ============================================================================

mod locale_parser;

pub use locale_parser::LocaleNumberParser;
