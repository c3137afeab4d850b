use std::path::Path;

use anyhow::Result;

use crate::config::ChainConfig;

pub fn cmd_info(config: &ChainConfig, config_path: &Path) -> Result<()> {
    let chain = config.build_chain()?;

    println!("Workorder Chain Information");
    println!("===========================");
    println!("Version:     {}", env!("CARGO_PKG_VERSION"));
    println!("Build date:  {}", env!("BUILD_DATE"));
    println!("Git hash:    {}", env!("GIT_HASH"));
    println!("Config file: {}", config_path.display());
    println!("Stages:      {}", chain.stage_names().join(" -> "));
    println!("Demo orders: {}", config.requests.len());
    Ok(())
}
