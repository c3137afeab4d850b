use anyhow::Result;
use serde::Serialize;

use super::output::OutputFormat;
use crate::config::ChainConfig;

#[derive(Serialize)]
struct StageRow {
    position: usize,
    name: &'static str,
    sentinel: &'static str,
    success: &'static str,
    failure: &'static str,
}

pub fn cmd_stages(config: &ChainConfig, output: OutputFormat) -> Result<()> {
    let chain = config.build_chain()?;
    let rows: Vec<StageRow> = chain
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            let stage = node.stage();
            StageRow {
                position: idx + 1,
                name: stage.name,
                sentinel: stage.sentinel,
                success: stage.success,
                failure: stage.failure,
            }
        })
        .collect();

    match output {
        OutputFormat::Human => {
            for row in &rows {
                println!("{}. {:<13} accepts {:?}", row.position, row.name, row.sentinel);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&rows)?),
    }
    Ok(())
}
