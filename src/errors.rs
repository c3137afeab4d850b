//! Error types for the CLI package

use std::path::PathBuf;

use thiserror::Error;
use workorder_chain_core::ChainError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Chain(#[from] ChainError),
}
