//! Serializable evaluation configuration.
//!
//! A TOML file (or defaults) describing one noise sweep: which strategies
//! to evaluate, the noise ladder, the trial count, and the master seed.
//! Every field is optional in the file; omitted fields fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use noiselab_core::StrategySpec;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for one evaluation sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Strategy names to evaluate, in order.
    pub strategies: Vec<String>,
    /// Noise ladder, in report order.
    pub noise_levels: Vec<f64>,
    /// Independent trials per noise level.
    pub trials: usize,
    /// Master seed for the RNG hierarchy.
    pub seed: u64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            strategies: StrategySpec::KNOWN_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            noise_levels: vec![0.01, 0.05, 0.1, 0.2],
            trials: 1000,
            seed: 42,
        }
    }
}

impl EvalConfig {
    /// Parse a TOML document. Unknown strategy names are not rejected here;
    /// the harness rejects them before running any trial.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
