// ============================================================================
// Precise Number Library
// Canonical decimal-string numbers with pluggable arithmetic engines
// ============================================================================

//! # Precise Number
//!
//! Numbers kept as canonical decimal strings, so values such as `0.1` or
//! `9223372036854775807` never pass through a lossy float on their way in.
//!
//! ## Features
//!
//! - **Literal preservation**: numeric text is stored exactly as given
//! - **Pluggable arithmetic engines**: fixed-scale decimal arithmetic with an
//!   always-available `f64` fallback, selected once at runtime
//! - **Locale-aware parsing** of text like `"EUR -1.250,75"` or `"2.500,75-"`
//! - **Serde support** (string on the wire) behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use precise_number::prelude::*;
//!
//! let price = NumericValue::parse("99.75").unwrap();
//! let fee = NumericValue::parse("0.25").unwrap();
//! assert_eq!(price.add(&fee).unwrap().as_str(), "100");
//!
//! let parser = LocaleNumberParser::from_locale(&NumberFormat::nl_nl());
//! let amount = parser.parse("EUR 1.250,75").unwrap();
//! assert_eq!(amount.as_str(), "1250.75");
//! assert_eq!(amount.to_integer().unwrap(), 1250);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod parser;

pub use numeric::{NumericError, NumericResult, NumericValue, ParseError};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{EngineConfig, EngineKind, NumberFormat};
    pub use crate::engine::{ArbitraryPrecisionEngine, EngineSelector, NativeFloatEngine};
    pub use crate::interfaces::{ArithmeticEngine, LocaleProvider, NumberFormatter};
    pub use crate::numeric::{
        ConfigurationError, NumericError, NumericResult, NumericValue, ParseError, RawNumber,
    };
    pub use crate::parser::LocaleNumberParser;
}
