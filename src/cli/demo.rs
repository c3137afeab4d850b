use anyhow::Result;
use tracing::info;

use super::handle::submit_all;
use super::output::{render_routes, OutputFormat};
use crate::config::ChainConfig;

/// Runs the configured sample work orders against the head of the chain.
pub fn cmd_demo(config: &ChainConfig, output: OutputFormat) -> Result<()> {
    let chain = config.build_chain()?;
    info!(
        stages = %chain.stage_names().join(" -> "),
        requests = config.requests.len(),
        "running demo"
    );
    let routes = submit_all(&chain, &config.requests);
    print!("{}", render_routes(&routes, output, false)?);
    Ok(())
}
