//! # Voting Configuration
//!
//! Deployment parameters: the initial candidate list and the window length.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{window_duration_secs, DEFAULT_CANDIDATES, DEFAULT_VOTING_DURATION_MINUTES};

/// Environment variable holding a comma-separated candidate list.
pub const ENV_CANDIDATES: &str = "VOTING_CANDIDATES";

/// Environment variable holding the voting duration in minutes.
pub const ENV_DURATION_MINUTES: &str = "VOTING_DURATION_MINUTES";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Duration is zero or does not fit in seconds.
    #[error("Invalid voting duration: {0} minutes")]
    InvalidDuration(u64),

    /// An environment override could not be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnvValue {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },
}

/// Deployment configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Candidate names registered at construction, in index order.
    pub candidates: Vec<String>,

    /// Length of the voting window in minutes.
    pub voting_duration_minutes: u64,
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            voting_duration_minutes: DEFAULT_VOTING_DURATION_MINUTES,
        }
    }
}

impl VotingConfig {
    /// Create a config for testing (two candidates, one-minute window).
    pub fn for_testing() -> Self {
        Self {
            candidates: vec!["alpha".to_string(), "beta".to_string()],
            voting_duration_minutes: 1,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `VOTING_CANDIDATES`: comma-separated names (default: Faizan,Ali,Malik)
    /// - `VOTING_DURATION_MINUTES`: window length (default: 200)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CANDIDATES) {
            config.candidates = parse_candidates(&raw);
        }

        if let Some(raw) = lookup(ENV_DURATION_MINUTES) {
            config.voting_duration_minutes =
                raw.trim().parse().map_err(|_| ConfigError::InvalidEnvValue {
                    var: ENV_DURATION_MINUTES,
                    value: raw.clone(),
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the duration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.duration_secs().map(|_| ())
    }

    /// Window length in seconds.
    pub fn duration_secs(&self) -> Result<u64, ConfigError> {
        window_duration_secs(self.voting_duration_minutes)
            .ok_or(ConfigError::InvalidDuration(self.voting_duration_minutes))
    }
}

/// Split a comma-separated list, trimming names and dropping empty entries.
pub fn parse_candidates(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
