// ============================================================================
// Domain Models Module
// Configuration and locale records
// ============================================================================

pub mod config;
pub mod locale;

pub use config::{EngineConfig, EngineKind, DEFAULT_SCALE, HIGH_PRECISION_SCALE, MAX_SCALE};
pub use locale::NumberFormat;
