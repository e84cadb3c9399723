// ============================================================================
// Numeric Module
// Canonical decimal-string numbers for precision-preserving calculations
// ============================================================================
//
// This module provides:
// - NumericValue: immutable canonical decimal string with engine arithmetic
// - RawNumber: every input kind a NumericValue can be built from
// - Error types for parsing, arithmetic and configuration
// - normalize: trailing-zero stripping shared by the engines
// - Conversions to and from rust_decimal and bigdecimal
//
// Design principles:
// - Text input is stored verbatim when it is numeric
// - Arithmetic results are always normalized
// - All fallible operations return Result (no panics)
// - Equality goes through the engine, never through string comparison

mod conversions;
mod errors;
mod float_repr;
mod format;
#[cfg(feature = "serde")]
mod serialization;
mod value;

pub use errors::{ConfigurationError, NumericError, NumericResult, ParseError};
pub use float_repr::normalize;
pub use value::{NumericValue, RawNumber};

pub(crate) use float_repr::canonical_from_f64;
