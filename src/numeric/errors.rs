// ============================================================================
// Numeric Errors
// Error types for parsing, arithmetic and engine configuration
// ============================================================================

use thiserror::Error;

/// Errors raised while turning raw input into a canonical numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input kind is not an integer, float, string or numeric value
    #[error("unsupported type, input was of type: {type_name}")]
    UnsupportedType { type_name: &'static str },

    /// String (or float) is not a numeric value
    #[error("no numerical value: {input:?}")]
    NotNumeric { input: String },

    /// Locale-normalized literal failed float validation
    #[error("could not parse {input:?} to a number (normalized literal: {literal:?})")]
    Unparseable { input: String, literal: String },
}

/// Errors in engine configuration and selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No candidate engine reports support in this build
    #[error("cannot find an arithmetic engine for number calculations")]
    NoEngineAvailable,

    /// Scale exceeds the accepted maximum
    #[error("invalid scale {scale}: maximum is {max}")]
    InvalidScale { scale: u32, max: u32 },

    /// The process-wide selector was already initialized
    #[error("the global engine selector is already initialized")]
    AlreadyInitialized,
}

/// Errors that can occur during numeric operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Attempted division by zero
    #[error("division by zero: {dividend} / {divisor}")]
    DivisionByZero { dividend: String, divisor: String },

    /// Operand or result outside the representable range
    #[error("arithmetic overflow in {operation}: {operands}")]
    Overflow {
        operation: &'static str,
        operands: String,
    },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl NumericError {
    pub(crate) fn overflow(operation: &'static str, lhs: &str, rhs: &str) -> Self {
        NumericError::Overflow {
            operation,
            operands: format!("{lhs}, {rhs}"),
        }
    }

    pub(crate) fn division_by_zero(dividend: &str, divisor: &str) -> Self {
        NumericError::DivisionByZero {
            dividend: dividend.to_string(),
            divisor: divisor.to_string(),
        }
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
