use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ChainConfig;

pub fn init_logging(level: &str, debug: bool) -> Result<()> {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        level.parse().context("Invalid log level")?
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

pub struct LoadedConfig {
    pub config: ChainConfig,
    pub path: PathBuf,
}

pub fn default_config_path() -> Result<PathBuf> {
    // Priority: ./config/workorder.yaml > ~/.config/workorder-chain/config.yaml
    let local_config = PathBuf::from("config/workorder.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }
    let mut path = dirs::config_dir().context("Failed to get config directory")?;
    path.push("workorder-chain");
    path.push("config.yaml");
    Ok(path)
}

pub async fn load_config(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
    let config_path = match config_path {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    let mut config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .await
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config = ChainConfig::from_yaml_str(&content).context("Failed to parse config file")?;
        info!("Loaded configuration from: {}", config_path.display());
        config
    } else {
        warn!(
            "Config file not found, using defaults: {}",
            config_path.display()
        );
        ChainConfig::default()
    };

    config
        .apply_env_overrides()
        .context("Invalid environment override")?;
    config.validate()?;

    Ok(LoadedConfig {
        config,
        path: config_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use workorder_chain_core::StageKind;

    #[tokio::test]
    #[serial]
    async fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let loaded = load_config(Some(&path)).await.unwrap();
        assert_eq!(loaded.config, ChainConfig::default());
        assert_eq!(loaded.path, path);
    }

    #[tokio::test]
    #[serial]
    async fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workorder.yaml");
        std::fs::write(
            &path,
            r#"stages:
  - availability
  - validator
requests:
  - "Available request"
"#,
        )
        .unwrap();

        let loaded = load_config(Some(&path)).await.unwrap();
        assert_eq!(
            loaded.config.stages,
            vec![StageKind::Availability, StageKind::Validator]
        );
        assert_eq!(loaded.config.requests, vec!["Available request"]);
    }

    #[tokio::test]
    #[serial]
    async fn empty_stage_list_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workorder.yaml");
        std::fs::write(&path, "stages: []\n").unwrap();
        assert!(load_config(Some(&path)).await.is_err());
    }
}
