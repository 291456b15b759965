//! Error types for the scan cycle.

use thiserror::Error;

/// Everything that can go wrong between "scan requested" and a rendered
/// report, one variant per scan stage.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("no active browser tab found")]
    NoActiveTab,

    #[error("could not read page cookies: {0}")]
    CookieAccess(String),

    #[error("browser connection failed: {0}")]
    Browser(String),

    #[error("audit request failed: {0}")]
    AuditRequest(#[from] reqwest::Error),

    #[error("malformed audit response: {0}")]
    ReportParse(#[from] serde_json::Error),
}
