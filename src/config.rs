//! Engine configuration.
//!
//! All fields have defaults matching the session organiser's usual setup,
//! so an empty TOML document is a valid configuration.
//!
//! ```
//! use u_matchup::config::MatchupConfig;
//!
//! let config = MatchupConfig::from_toml_str("max_k = 12").unwrap();
//! assert_eq!(config.max_k, 12);
//! assert_eq!(config.attempt_factor, 5);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::feasibility::DEFAULT_MAX_K;
use crate::scheduler::DEFAULT_ATTEMPT_FACTOR;

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid TOML for [`MatchupConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable constants of the match generator and its request layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchupConfig {
    /// Largest per-player game count offered by the feasibility calculator.
    pub max_k: u32,
    /// Attempt budget multiplier for mixed doubles and singles
    /// (`budget = target matches * attempt_factor`).
    pub attempt_factor: usize,
    /// Smallest roster the request layer accepts for doubles modes.
    pub min_doubles_roster: usize,
    /// Smallest roster the request layer accepts for singles.
    pub min_singles_roster: usize,
}

impl Default for MatchupConfig {
    fn default() -> Self {
        Self {
            max_k: DEFAULT_MAX_K,
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
            min_doubles_roster: 6,
            min_singles_roster: 2,
        }
    }
}

impl MatchupConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Sets the feasibility upper bound.
    pub fn with_max_k(mut self, max_k: u32) -> Self {
        self.max_k = max_k;
        self
    }

    /// Sets the attempt budget multiplier.
    pub fn with_attempt_factor(mut self, factor: usize) -> Self {
        self.attempt_factor = factor;
        self
    }

    /// Sets the request-layer roster minimums.
    pub fn with_roster_minimums(mut self, doubles: usize, singles: usize) -> Self {
        self.min_doubles_roster = doubles;
        self.min_singles_roster = singles;
        self
    }
}
