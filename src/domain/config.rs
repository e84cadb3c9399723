// ============================================================================
// Engine Configuration
// Working scale and candidate order for arithmetic engine selection
// ============================================================================

use crate::numeric::ConfigurationError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits kept by the arbitrary-precision engine by default
pub const DEFAULT_SCALE: u32 = 14;

/// Largest accepted working scale; every truncation scales by `10^scale`
pub const MAX_SCALE: u32 = 1_000;

/// Working scale of the [`EngineConfig::high_precision`] preset
pub const HIGH_PRECISION_SCALE: u32 = 50;

// ============================================================================
// Engine Kind
// ============================================================================

/// The arithmetic backends known to the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EngineKind {
    /// Unbounded decimal arithmetic, truncating at the configured scale
    /// - Exact for operands of any magnitude and digit count
    /// - Requires the `arbitrary-precision` feature
    ArbitraryPrecision,

    /// Native 64-bit float arithmetic
    /// - Always available
    /// - Loses precision beyond ~17 significant digits
    NativeFloat,
}

impl EngineKind {
    /// Default priority: exact arithmetic first, floats as the fallback
    pub const DEFAULT_PRIORITY: [EngineKind; 2] =
        [EngineKind::ArbitraryPrecision, EngineKind::NativeFloat];
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::ArbitraryPrecision => write!(f, "arbitrary-precision"),
            EngineKind::NativeFloat => write!(f, "native-float"),
        }
    }
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Configuration for an [`EngineSelector`](crate::engine::EngineSelector)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Fractional digits kept by the arbitrary-precision engine (0-1000)
    pub scale: u32,

    /// Engines to try, in priority order
    pub candidates: Vec<EngineKind>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            candidates: EngineKind::DEFAULT_PRIORITY.to_vec(),
        }
    }
}

impl EngineConfig {
    /// Builder method: Set the working scale
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder method: Replace the candidate list
    pub fn with_candidates(mut self, candidates: Vec<EngineKind>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Validate the configuration
    ///
    /// An empty candidate list is valid here; selection reports it as
    /// `NoEngineAvailable` on first use.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.scale > MAX_SCALE {
            return Err(ConfigurationError::InvalidScale {
                scale: self.scale,
                max: MAX_SCALE,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Floats only, regardless of build features
    pub fn native_only() -> Self {
        Self::default().with_candidates(vec![EngineKind::NativeFloat])
    }

    /// Decimal arithmetic at 50 fractional digits
    pub fn high_precision() -> Self {
        Self::default().with_scale(HIGH_PRECISION_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.scale, 14);
        assert_eq!(
            config.candidates,
            vec![EngineKind::ArbitraryPrecision, EngineKind::NativeFloat]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_scale(4)
            .with_candidates(vec![EngineKind::NativeFloat]);

        assert_eq!(config.scale, 4);
        assert_eq!(config.candidates, vec![EngineKind::NativeFloat]);
    }

    #[test]
    fn test_validation() {
        assert!(EngineConfig::default().with_scale(29).validate().is_ok());
        assert!(EngineConfig::default().with_scale(MAX_SCALE).validate().is_ok());

        let config = EngineConfig::default().with_scale(1_001);
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidScale {
                scale: 1_001,
                max: 1_000
            })
        );

        assert!(EngineConfig::default()
            .with_candidates(Vec::new())
            .validate()
            .is_ok());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(EngineConfig::native_only().candidates, vec![EngineKind::NativeFloat]);
        assert_eq!(EngineConfig::high_precision().scale, 50);
        assert!(EngineConfig::high_precision().validate().is_ok());
    }

    #[test]
    fn test_engine_kind_display() {
        assert_eq!(EngineKind::ArbitraryPrecision.to_string(), "arbitrary-precision");
        assert_eq!(EngineKind::NativeFloat.to_string(), "native-float");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: EngineConfig = serde_json::from_str(r#"{"scale": 6}"#).unwrap();
        assert_eq!(config.scale, 6);
        assert_eq!(config.candidates, EngineKind::DEFAULT_PRIORITY.to_vec());

        let config: EngineConfig =
            serde_json::from_str(r#"{"candidates": ["native_float"]}"#).unwrap();
        assert_eq!(config, EngineConfig::native_only());
    }
}
