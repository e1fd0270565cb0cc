//! # Runtime Configuration
//!
//! Loaded once at startup, usually from TOML:
//!
//! ```toml
//! seed = 42              # omit for entropy
//! delay_mode = "absolute" # or "per_tick"
//! max_instances = 256
//! max_delta = 4.0       # optional; omit to pass deltas through
//! ```

use std::path::Path;

use serde::Deserialize;
use sparkfx_core::DelayMode;

use crate::error::{RuntimeError, RuntimeResult};

/// Default cap on simultaneously active instances.
pub const DEFAULT_MAX_INSTANCES: usize = 256;

/// Configuration for a [`Runtime`](crate::Runtime).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Seed for the random source; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// How particle delays are interpreted.
    pub delay_mode: DelayMode,
    /// Maximum simultaneously active instances.
    pub max_instances: usize,
    /// Optional cap on a single tick's delta. `None` (the default) advances
    /// particles by exactly the delta the host passes.
    pub max_delta: Option<f32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            delay_mode: DelayMode::Absolute,
            max_instances: DEFAULT_MAX_INSTANCES,
            max_delta: None,
        }
    }
}

impl RuntimeConfig {
    /// Default configuration with a fixed seed (reproducible runs).
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Sets the delay mode.
    #[must_use]
    pub const fn with_delay_mode(mut self, mode: DelayMode) -> Self {
        self.delay_mode = mode;
        self
    }

    /// Sets the instance cap.
    #[must_use]
    pub const fn with_max_instances(mut self, max: usize) -> Self {
        self.max_instances = max;
        self
    }

    /// Caps each tick's delta at `max`.
    #[must_use]
    pub const fn with_max_delta(mut self, max: f32) -> Self {
        self.max_delta = Some(max);
        self
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidConfig`] on syntax errors, unknown keys,
    /// or out-of-range values.
    pub fn from_toml_str(source: &str) -> RuntimeResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| RuntimeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Io`] if the file cannot be read, otherwise as
    /// [`RuntimeConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> RuntimeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!("Loaded runtime config from {}", path.display());
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidConfig`] if `max_instances` is zero or
    /// a configured `max_delta` is not a positive finite number.
    pub fn validate(&self) -> RuntimeResult<()> {
        if self.max_instances == 0 {
            return Err(RuntimeError::InvalidConfig(
                "max_instances must be at least 1".to_string(),
            ));
        }
        if let Some(max) = self.max_delta {
            if !(max.is_finite() && max > 0.0) {
                return Err(RuntimeError::InvalidConfig(format!(
                    "max_delta must be positive and finite, got {max}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            seed = 7
            delay_mode = "per_tick"
            max_instances = 12
            max_delta = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.delay_mode, DelayMode::PerTick);
        assert_eq!(config.max_instances, 12);
        assert_eq!(config.max_delta, Some(2.5));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = RuntimeConfig::from_toml_str("").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.max_delta, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        for source in [
            "max_instances = 0",
            "max_delta = -1.0",
            "max_delta = nan",
            "delay_mode = \"sometimes\"",
            "unknown_key = 1",
            "seed = ",
        ] {
            assert!(
                matches!(
                    RuntimeConfig::from_toml_str(source),
                    Err(RuntimeError::InvalidConfig(_))
                ),
                "{source:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RuntimeConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RuntimeError::Io(_)));
    }
}
