use async_trait::async_trait;

use crate::core::error::ScanError;

/// A scannable browser tab.
#[derive(Debug, Clone)]
pub struct Tab {
    pub id: String,
    pub url: String,
}

/// The two capabilities a scan needs from the browser: finding the tab
/// the user is looking at, and evaluating a cookie read inside that
/// page.
#[async_trait]
pub trait BrowserHost: Send + Sync {
    async fn active_tab(&self) -> Result<Tab, ScanError>;

    /// Returns the page's raw cookie header, `""` when the page has no
    /// cookies. A page that cannot produce a string result is a
    /// `CookieAccess` failure, not an empty result.
    async fn read_cookies(&self, tab: &Tab) -> Result<String, ScanError>;
}
