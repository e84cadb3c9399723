// ============================================================================
// Engine Selection
// Runtime capability detection and the process-wide engine cache
// ============================================================================

use super::{ArbitraryPrecisionEngine, NativeFloatEngine};
use crate::domain::{EngineConfig, EngineKind};
use crate::interfaces::ArithmeticEngine;
use crate::numeric::{ConfigurationError, NumericResult};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

impl EngineKind {
    /// Whether this engine can run in the current build.
    pub fn is_supported(self) -> bool {
        match self {
            EngineKind::ArbitraryPrecision => ArbitraryPrecisionEngine::supported(),
            EngineKind::NativeFloat => NativeFloatEngine::supported(),
        }
    }

    /// Create the engine described by this kind.
    pub fn instantiate(self, config: &EngineConfig) -> Arc<dyn ArithmeticEngine> {
        match self {
            EngineKind::ArbitraryPrecision => {
                Arc::new(ArbitraryPrecisionEngine::new(config.scale))
            },
            EngineKind::NativeFloat => Arc::new(NativeFloatEngine::new()),
        }
    }
}

static GLOBAL: OnceLock<EngineSelector> = OnceLock::new();

/// Chooses the first supported engine from an ordered candidate list and
/// caches it.
///
/// Selection happens once, on first use. Concurrent first callers are
/// serialized by a write lock, so exactly one engine instance is created and
/// every caller observes the same `Arc` afterwards.
///
/// # Example
/// ```
/// use precise_number::domain::EngineConfig;
/// use precise_number::engine::EngineSelector;
///
/// let selector = EngineSelector::new(EngineConfig::native_only()).unwrap();
/// assert_eq!(selector.engine().unwrap().name(), "NativeFloat");
/// ```
pub struct EngineSelector {
    /// Scale and candidate order
    config: RwLock<EngineConfig>,

    /// Engine picked on first use
    selected: RwLock<Option<Arc<dyn ArithmeticEngine>>>,
}

impl EngineSelector {
    /// Create a selector from a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        Ok(Self {
            config: RwLock::new(config),
            selected: RwLock::new(None),
        })
    }

    /// The process-wide selector used by the arithmetic methods of
    /// [`NumericValue`](crate::NumericValue).
    ///
    /// Uses [`EngineConfig::default`] unless [`install_global`](Self::install_global)
    /// ran first.
    pub fn global() -> &'static EngineSelector {
        GLOBAL.get_or_init(EngineSelector::default)
    }

    /// Install a custom process-wide selector.
    ///
    /// # Errors
    /// - `InvalidScale` if the configuration does not validate
    /// - `AlreadyInitialized` if the global selector is already in use
    pub fn install_global(
        config: EngineConfig,
    ) -> Result<&'static EngineSelector, ConfigurationError> {
        let selector = EngineSelector::new(config)?;
        GLOBAL
            .set(selector)
            .map_err(|_| ConfigurationError::AlreadyInitialized)?;
        Ok(Self::global())
    }

    /// The selected engine, choosing one on first use.
    ///
    /// # Errors
    /// Returns `NoEngineAvailable` when no candidate is supported. The failure
    /// is not cached.
    pub fn engine(&self) -> NumericResult<Arc<dyn ArithmeticEngine>> {
        if let Some(engine) = self.selected.read().as_ref() {
            return Ok(Arc::clone(engine));
        }

        let mut slot = self.selected.write();
        // Another thread may have won the race for the write lock
        if let Some(engine) = slot.as_ref() {
            return Ok(Arc::clone(engine));
        }

        let engine = self.select()?;
        *slot = Some(Arc::clone(&engine));
        Ok(engine)
    }

    /// Name of the cached engine, if one was selected already.
    pub fn selected_name(&self) -> Option<String> {
        self.selected
            .read()
            .as_ref()
            .map(|engine| engine.name().to_string())
    }

    /// Current configuration.
    pub fn config(&self) -> EngineConfig {
        self.config.read().clone()
    }

    /// Drop the cached engine so the next call selects again.
    ///
    /// Not part of normal operation; meant for tests and tooling.
    pub fn reset(&self) {
        *self.selected.write() = None;
        tracing::debug!("Arithmetic engine cache cleared");
    }

    /// Replace the candidate list and drop the cached engine.
    ///
    /// Not part of normal operation; meant for tests and tooling.
    pub fn set_candidates(&self, candidates: Vec<EngineKind>) {
        // Hold the cache lock so no caller selects from a half-updated state
        let mut slot = self.selected.write();
        self.config.write().candidates = candidates;
        *slot = None;
        tracing::debug!("Arithmetic engine candidates replaced");
    }

    fn select(&self) -> NumericResult<Arc<dyn ArithmeticEngine>> {
        let config = self.config.read();

        for kind in &config.candidates {
            if kind.is_supported() {
                let engine = kind.instantiate(&config);
                tracing::info!(
                    engine = engine.name(),
                    scale = config.scale,
                    "Selected arithmetic engine"
                );
                return Ok(engine);
            }
            tracing::debug!(candidate = %kind, "Arithmetic engine not supported, skipping");
        }

        tracing::warn!(candidates = ?config.candidates, "No arithmetic engine available");
        Err(ConfigurationError::NoEngineAvailable.into())
    }
}

impl Default for EngineSelector {
    fn default() -> Self {
        Self {
            config: RwLock::new(EngineConfig::default()),
            selected: RwLock::new(None),
        }
    }
}

impl std::fmt::Debug for EngineSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineSelector")
            .field("config", &self.config())
            .field("selected", &self.selected_name())
            .finish()
    }
}
