pub mod commands;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "datashield", version, about = "Audit the privacy of the site you are browsing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the active browser tab and report its privacy score
    Scan(commands::scan::ScanArgs),
    /// Check that the audit service is up
    Health(commands::health::HealthArgs),
}
