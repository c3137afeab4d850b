//! Chain configuration
//!
//! Values come from built-in defaults, then an optional YAML file, then
//! environment overrides.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;
use workorder_chain_core::{Chain, StageKind};

use crate::errors::ConfigError;

/// Comma separated stage names, e.g. `validator,deadline`.
pub const ENV_STAGES: &str = "WORKORDER_CHAIN_STAGES";
/// `|` separated sample requests used by `demo`.
pub const ENV_REQUESTS: &str = "WORKORDER_CHAIN_REQUESTS";

pub const SAMPLE_REQUESTS: [&str; 4] = [
    "Valid request",
    "Available request",
    "On time request",
    "Invalid request",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Stage order from head to terminal node.
    pub stages: Vec<StageKind>,
    /// Requests submitted by `demo`.
    pub requests: Vec<String>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            stages: StageKind::ALL.to_vec(),
            requests: SAMPLE_REQUESTS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl ChainConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = env::var(ENV_STAGES) {
            if !raw.trim().is_empty() {
                self.stages = parse_stage_list(&raw)?;
                debug!(stages = %raw, "stage order overridden from environment");
            }
        }

        if let Ok(raw) = env::var(ENV_REQUESTS) {
            let requests: Vec<String> = raw
                .split('|')
                .filter(|r| !r.is_empty())
                .map(|r| r.to_string())
                .collect();
            if !requests.is_empty() {
                debug!(count = requests.len(), "demo requests overridden from environment");
                self.requests = requests;
            }
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.is_empty() {
            return Err(ConfigError::Invalid("stages must not be empty".into()));
        }
        Ok(())
    }

    pub fn build_chain(&self) -> Result<Chain, ConfigError> {
        self.validate()?;
        Ok(Chain::from_stages(&self.stages)?)
    }
}

pub fn parse_stage_list(raw: &str) -> Result<Vec<StageKind>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<StageKind>().map_err(ConfigError::from))
        .collect()
}
