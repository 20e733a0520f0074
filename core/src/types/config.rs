use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use thiserror::Error;

/// Allowed deviation of `edit + keyboard + phonetic` from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Matcher configuration, loadable from a TOML file.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Use Jaro-Winkler instead of normalized Levenshtein for the edit signal.
    pub use_enhanced_edit_variant: bool,
    /// Maximum number of cached query rankings.
    pub cache_size: usize,
    /// Number of matches reported by input analysis.
    pub max_results: usize,
    pub weights: Weights,
    pub thresholds: Thresholds,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            use_enhanced_edit_variant: false,
            cache_size: default_cache_size(),
            max_results: default_max_results(),
            weights: Weights::default(),
            thresholds: Thresholds::default(),
        }
    }
}

impl MatcherConfig {
    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    ///
    /// The loaded values are not validated here; engine construction does that.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigFileError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks every numeric constraint and returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.thresholds.validate()?;

        if self.cache_size == 0 {
            return Err(ConfigError::ZeroCacheSize);
        }
        if self.max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }

        Ok(())
    }

    /// Cache capacity as a non-zero value. Call after [`validate`](Self::validate).
    pub fn cache_capacity(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.cache_size).ok_or(ConfigError::ZeroCacheSize)
    }
}

/// Signal weights for the score combination.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub edit: f64,
    pub keyboard: f64,
    pub phonetic: f64,
    /// Scales the relative length difference subtracted from the raw score.
    pub length_penalty: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            edit: 0.4,
            keyboard: 0.4,
            phonetic: 0.2,
            length_penalty: 0.1,
        }
    }
}

impl Weights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("edit", self.edit),
            ("keyboard", self.keyboard),
            ("phonetic", self.phonetic),
            ("length_penalty", self.length_penalty),
        ] {
            if value.is_infinite() {
                return Err(ConfigError::NonFiniteWeight { name, value });
            }
            // Also rejects NaN.
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }

        let sum = self.edit + self.keyboard + self.phonetic;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE || !sum.is_finite() {
            return Err(ConfigError::WeightSum {
                sum,
                tolerance: WEIGHT_SUM_TOLERANCE,
            });
        }

        Ok(())
    }
}

/// Score thresholds.
///
/// `matching` is the cut-off for ranked output; `medium` and `high` bucket
/// the confidence of what passes; `redirect` is the default bar for
/// automatic redirects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    #[serde(rename = "match")]
    pub matching: f64,
    pub medium: f64,
    pub high: f64,
    pub redirect: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            matching: 0.6,
            medium: 0.7,
            high: 0.8,
            redirect: 0.8,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("match", self.matching),
            ("medium", self.medium),
            ("high", self.high),
            ("redirect", self.redirect),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }

        if self.matching > self.medium || self.medium > self.high {
            return Err(ConfigError::ThresholdOrder {
                matching: self.matching,
                medium: self.medium,
                high: self.high,
            });
        }

        Ok(())
    }
}

fn default_cache_size() -> usize {
    1024
}

fn default_max_results() -> usize {
    10
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
