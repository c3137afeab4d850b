use thiserror::Error;

/// Errors raised while assembling a chain. Request handling never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain must contain at least one stage")]
    EmptyChain,
    #[error("unknown stage: {0}")]
    UnknownStage(String),
}
