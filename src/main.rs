mod audit;
mod browser;
mod cli;
mod core;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the rendered report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Scan(args) => {
            cli::commands::scan::execute(args).await?;
        }
        Commands::Health(args) => {
            cli::commands::health::execute(args).await?;
        }
    }

    Ok(())
}
