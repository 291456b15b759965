use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::audit::AuditClient;
use crate::browser::{BrowserHost, CdpBrowser};
use crate::cli::output::OutputFormatter;
use crate::cli::progress::ScanProgress;
use crate::core::config::Config;
use crate::core::controller::ScanController;
use crate::core::state::ScanState;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,

    /// Audit service base URL (defaults to http://localhost:5000)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Browser DevTools URL (defaults to http://localhost:9222)
    #[arg(long)]
    pub devtools: Option<String>,

    /// Request timeout in seconds (waits indefinitely when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,
}

pub async fn execute(args: &ScanArgs) -> Result<()> {
    let config = Config::load(Path::new("."));
    let timeout = config.request_timeout(args.timeout);
    let host = CdpBrowser::new(&config.devtools_url(args.devtools.as_deref()), timeout);
    let audit = AuditClient::new(&config.audit_endpoint(args.endpoint.as_deref()), timeout);

    let site = current_site(&host).await;

    let spinner = (args.format == "table").then(|| ScanProgress::new(site.as_deref()));
    let mut controller = ScanController::new(host, audit);
    controller.scan().await;
    if let Some(spinner) = &spinner {
        spinner.finish();
    }

    let formatter = OutputFormatter::new(&args.format);
    formatter.display(controller.state(), site.as_deref());

    if let ScanState::Error(_) = controller.state() {
        std::process::exit(1);
    }
    Ok(())
}

/// Hostname for the header line. Resolved independently of the scan
/// cycle; a failure here stays silent and the scan still runs.
async fn current_site(host: &impl BrowserHost) -> Option<String> {
    let tab = host.active_tab().await.ok()?;
    let url = url::Url::parse(&tab.url).ok()?;
    url.host_str().map(str::to_string)
}
