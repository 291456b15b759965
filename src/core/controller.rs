use tracing::{debug, warn};

use crate::audit::AuditClient;
use crate::browser::BrowserHost;
use crate::core::cookies;
use crate::core::error::ScanError;
use crate::core::report::Report;
use crate::core::state::ScanState;

/// Drives one scan cycle: active tab, cookie read, name extraction,
/// audit request. Holds the single `ScanState` the presentation layer
/// renders from.
pub struct ScanController<H: BrowserHost> {
    host: H,
    audit: AuditClient,
    state: ScanState,
}

impl<H: BrowserHost> ScanController<H> {
    pub fn new(host: H, audit: AuditClient) -> Self {
        ScanController {
            host,
            audit,
            state: ScanState::Idle,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Runs a scan and settles into `Ready` or `Error`. Any previous
    /// report or error is discarded up front. Taking `&mut self`
    /// serializes callers, so two scans cannot race on the state.
    pub async fn scan(&mut self) -> &ScanState {
        self.state = ScanState::Loading;
        self.state = match self.run_cycle().await {
            Ok(report) => {
                debug!("scan complete: privacy score {}", report.privacy_score);
                ScanState::Ready(report)
            }
            Err(err) => {
                log_failure(&err);
                ScanState::Error(err.to_string())
            }
        };
        &self.state
    }

    async fn run_cycle(&self) -> Result<Report, ScanError> {
        let tab = self.host.active_tab().await?;
        let header = self.host.read_cookies(&tab).await?;
        let names = cookies::cookie_names(&header);
        debug!("extracted {} cookie name(s) from {}", names.len(), tab.url);
        self.audit.audit(&tab.url, &names).await
    }
}

fn log_failure(err: &ScanError) {
    match err {
        ScanError::AuditRequest(e) if e.is_connect() => {
            warn!("scan failed: audit service unreachable: {}", e);
        }
        ScanError::AuditRequest(e) if e.is_timeout() => {
            warn!("scan failed: audit request timed out: {}", e);
        }
        _ => warn!("scan failed: {}", err),
    }
}
