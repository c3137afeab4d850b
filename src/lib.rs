//! Workorder chain library
//!
//! Exposes configuration and CLI commands for integration testing

pub mod cli;
pub mod config;
pub mod errors;

pub use config::ChainConfig;
pub use errors::ConfigError;
