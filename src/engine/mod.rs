// ============================================================================
// Engine Module
// Arithmetic backends and the runtime selection between them
// ============================================================================

mod arbitrary_precision;
mod native_float;
mod selector;

pub use arbitrary_precision::ArbitraryPrecisionEngine;
pub use native_float::NativeFloatEngine;
pub use selector::EngineSelector;

pub(crate) use arbitrary_precision::{parse_big_decimal, to_plain_string};
