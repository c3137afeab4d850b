use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use workorder_chain::cli::runtime::{init_logging, load_config};
use workorder_chain::cli::{cmd_demo, cmd_handle, cmd_info, cmd_stages, HandleArgs, OutputFormat};

/// Work order validation pipeline
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the configured sample work orders
    Demo,

    /// Submit work orders given on the command line
    Handle(HandleArgs),

    /// Show the chain's stage order
    Stages,

    /// Show build and configuration information
    Info,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.debug)?;

    let loaded = load_config(cli.config.as_ref()).await?;
    debug!(path = %loaded.path.display(), "configuration ready");

    match cli.command {
        Commands::Demo => cmd_demo(&loaded.config, cli.output),
        Commands::Handle(args) => cmd_handle(&loaded.config, &args, cli.output),
        Commands::Stages => cmd_stages(&loaded.config, cli.output),
        Commands::Info => cmd_info(&loaded.config, &loaded.path),
    }
}
