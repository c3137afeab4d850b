use anyhow::Result;
use clap::Args;
use tracing::{info, info_span};
use uuid::Uuid;
use workorder_chain_core::{Chain, Route};

use super::output::{render_routes, OutputFormat};
use crate::config::ChainConfig;

#[derive(Args, Debug)]
pub struct HandleArgs {
    /// Work order requests to submit to the head of the chain
    #[arg(required = true, value_name = "REQUEST")]
    pub requests: Vec<String>,

    /// Show the stages each request visited
    #[arg(long)]
    pub trace: bool,
}

pub fn cmd_handle(config: &ChainConfig, args: &HandleArgs, output: OutputFormat) -> Result<()> {
    let chain = config.build_chain()?;
    let routes = submit_all(&chain, &args.requests);
    print!("{}", render_routes(&routes, output, args.trace)?);
    Ok(())
}

/// Submits each request to the head, in order, one span per work order.
pub fn submit_all(chain: &Chain, requests: &[String]) -> Vec<Route> {
    requests
        .iter()
        .map(|request| {
            let span = info_span!("work_order", id = %Uuid::new_v4());
            let _guard = span.enter();
            let route = chain.route(request);
            info!(
                request = %route.request,
                resolved_by = route.resolved_by.unwrap_or("-"),
                result = %route.result,
                "work order processed"
            );
            route
        })
        .collect()
}
