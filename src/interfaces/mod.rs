// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod arithmetic_engine;
mod locale;

pub use arithmetic_engine::ArithmeticEngine;
pub use locale::{LocaleProvider, NumberFormatter};
