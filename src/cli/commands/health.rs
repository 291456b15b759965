use anyhow::Result;
use clap::Args;
use colored::*;
use std::path::Path;
use std::time::Duration;

use crate::audit::AuditClient;
use crate::core::config::Config;

/// Applied when no timeout is configured; probes never wait
/// indefinitely.
const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Audit service base URL (defaults to http://localhost:5000)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Probe timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

pub async fn execute(args: &HealthArgs) -> Result<()> {
    let config = Config::load(Path::new("."));
    let timeout = config
        .request_timeout(args.timeout)
        .unwrap_or(DEFAULT_PROBE_TIMEOUT);
    let client = AuditClient::new(&config.audit_endpoint(args.endpoint.as_deref()), Some(timeout));

    match client.health().await {
        Ok(health) if health.is_healthy() => {
            let version = health
                .version
                .map(|v| format!(" (version {})", v))
                .unwrap_or_default();
            println!(
                "{} audit service at {}{}",
                "OK".green().bold(),
                client.endpoint(),
                version
            );
        }
        Ok(health) => {
            println!(
                "{} audit service at {} reports status {}",
                "WARN".yellow().bold(),
                client.endpoint(),
                health.status
            );
            std::process::exit(1);
        }
        Err(err) => {
            println!(
                "{} audit service at {} is unreachable: {}",
                "FAIL".red().bold(),
                client.endpoint(),
                err
            );
            std::process::exit(1);
        }
    }
    Ok(())
}
