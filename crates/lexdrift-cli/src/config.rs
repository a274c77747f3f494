// crates/lexdrift-cli/src/config.rs
//
// Runtime configuration for the Lexdrift CLI.
// Loaded from a TOML file or populated with sensible defaults.

use std::fs;
use std::path::Path;

use lexdrift_core::params::{
    DEFAULT_DRIFT_LIMITER, DEFAULT_DRIFT_THRESHOLD, DEFAULT_RANDOMNESS, DEFAULT_TEMPERATURE,
};
use lexdrift_core::{ControlParameters, DriftError};
use lexdrift_engine::DEFAULT_MAX_ITERATIONS;
use serde::Deserialize;

use crate::output::OutputFormat;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.lexdrift/config.toml";

/// Runtime configuration for drift runs.
#[derive(Debug, Clone, Deserialize)]
pub struct DriftConfig {
    /// Starting temperature (theta).
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Starting randomness (rho).
    #[serde(default = "default_randomness")]
    pub randomness: f64,

    /// Selector threshold (delta).
    #[serde(default = "default_drift_threshold")]
    pub drift_threshold: f64,

    /// Intensity cap and tolerance damping (lambda).
    #[serde(default = "default_drift_limiter")]
    pub drift_limiter: f64,

    /// Iteration budget per run.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Fixed RNG seed. When absent, runs draw from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Overridden by RUST_LOG when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format: "table" or "json".
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_randomness() -> f64 {
    DEFAULT_RANDOMNESS
}

fn default_drift_threshold() -> f64 {
    DEFAULT_DRIFT_THRESHOLD
}

fn default_drift_limiter() -> f64 {
    DEFAULT_DRIFT_LIMITER
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            randomness: default_randomness(),
            drift_threshold: default_drift_threshold(),
            drift_limiter: default_drift_limiter(),
            max_iterations: default_max_iterations(),
            seed: None,
            log_level: default_log_level(),
            format: OutputFormat::default(),
        }
    }
}

impl DriftConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, DriftError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DriftError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, DriftError> {
        toml::from_str(contents).map_err(|e| DriftError::Config(e.to_string()))
    }

    /// Control parameters built from this config, clamped into `[0, 1]`.
    pub fn control_parameters(&self) -> ControlParameters {
        ControlParameters::new(
            self.temperature,
            self.randomness,
            self.drift_threshold,
            self.drift_limiter,
        )
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
