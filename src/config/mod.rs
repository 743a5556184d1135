//! Score parameter loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

pub const DEFAULT_ALPHA: f64 = 190.0;
pub const DEFAULT_BETA: f64 = 0.05;
pub const DEFAULT_SIGMA: f64 = 1.9;
pub const DEFAULT_POINTS_LAST_KING: u64 = 30;

/// Weights applied by the statistics when turning a game into points.
///
/// - `alpha` scales the share of the game spent as king.
/// - `beta` scales the sum of `percent ** sigma` over individual reigns.
/// - `points_last_king` is the flat bonus for holding the crown at the end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreParameters {
    pub alpha: f64,
    pub beta: f64,
    pub sigma: f64,
    pub points_last_king: u64,
}

impl Default for ScoreParameters {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            sigma: DEFAULT_SIGMA,
            points_last_king: DEFAULT_POINTS_LAST_KING,
        }
    }
}

impl ScoreParameters {
    pub fn new(alpha: f64, beta: f64, sigma: f64, points_last_king: u64) -> Self {
        Self {
            alpha,
            beta,
            sigma,
            points_last_king,
        }
    }

    /// Same weights, no bonus for the last king.
    pub fn without_last_king_bonus(self) -> Self {
        Self {
            points_last_king: 0,
            ..self
        }
    }

    /// Load parameters from a JSON file, surfacing every failure.
    pub fn try_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let params: ScoreParameters = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a JSON file.
    ///
    /// Never fails: any read, parse or validation error is logged and the
    /// default parameters are returned instead.
    pub fn from_file(path: &Path) -> Self {
        match Self::try_from_file(path) {
            Ok(params) => params,
            Err(e) => {
                warn!(
                    "Error reading score parameters from {:?}, using defaults instead: {}",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Validate the parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("sigma", self.sigma),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
