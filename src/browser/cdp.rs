//! Browser access over the Chrome DevTools protocol.
//!
//! The browser must be started with `--remote-debugging-port`. Targets
//! are discovered through the `/json/list` HTTP endpoint; the cookie
//! read is a single `Runtime.evaluate` of `document.cookie` over the
//! target's debugger WebSocket.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::debug;

use crate::browser::traits::{BrowserHost, Tab};
use crate::core::error::ScanError;

/// One command per socket, so a fixed request id is enough.
const EVALUATE_ID: u64 = 1;

#[derive(Debug, Clone, Deserialize)]
struct CdpTarget {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    url: String,
    #[serde(rename = "webSocketDebuggerUrl")]
    ws_url: Option<String>,
}

pub struct CdpBrowser {
    http: reqwest::Client,
    devtools: String,
    timeout: Option<Duration>,
}

impl CdpBrowser {
    pub fn new(devtools: &str, timeout: Option<Duration>) -> Self {
        CdpBrowser {
            http: reqwest::Client::new(),
            devtools: devtools.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    async fn list_targets(&self) -> Result<Vec<CdpTarget>, ScanError> {
        let url = format!("{}/json/list", self.devtools);
        let mut request = self.http.get(&url);
        if let Some(limit) = self.timeout {
            request = request.timeout(limit);
        }

        let response = request.send().await.map_err(|e| {
            ScanError::Browser(format!("devtools endpoint {}: {}", self.devtools, e))
        })?;
        if !response.status().is_success() {
            return Err(ScanError::Browser(format!(
                "devtools endpoint returned {}",
                response.status()
            )));
        }
        response
            .json::<Vec<CdpTarget>>()
            .await
            .map_err(|e| ScanError::Browser(format!("unexpected target list: {}", e)))
    }

    async fn evaluate_cookies(&self, target: &CdpTarget) -> Result<String, ScanError> {
        let ws_url = target.ws_url.as_deref().ok_or_else(|| {
            ScanError::Browser(format!("target {} exposes no debugger socket", target.id))
        })?;

        let (mut ws, _) = connect_async(ws_url)
            .await
            .map_err(|e| ScanError::Browser(format!("debugger socket: {}", e)))?;

        let request = json!({
            "id": EVALUATE_ID,
            "method": "Runtime.evaluate",
            "params": {
                "expression": "document.cookie",
                "returnByValue": true,
            }
        });
        ws.send(Message::Text(request.to_string()))
            .await
            .map_err(|e| ScanError::Browser(format!("debugger send: {}", e)))?;

        while let Some(message) = ws.next().await {
            let message =
                message.map_err(|e| ScanError::Browser(format!("debugger read: {}", e)))?;
            if let Message::Text(text) = message {
                let response: Value = serde_json::from_str(&text)
                    .map_err(|e| ScanError::Browser(format!("debugger reply: {}", e)))?;
                // Events arrive on the same socket; only the reply to
                // our id counts.
                if response.get("id").and_then(Value::as_u64) == Some(EVALUATE_ID) {
                    return cookie_result(&response);
                }
            }
        }

        Err(ScanError::Browser(
            "debugger socket closed before answering".to_string(),
        ))
    }
}

#[async_trait]
impl BrowserHost for CdpBrowser {
    async fn active_tab(&self) -> Result<Tab, ScanError> {
        let targets = self.list_targets().await?;
        let target = pick_active(targets).ok_or(ScanError::NoActiveTab)?;
        debug!("active tab: {} ({})", target.id, target.url);
        Ok(Tab {
            id: target.id,
            url: target.url,
        })
    }

    async fn read_cookies(&self, tab: &Tab) -> Result<String, ScanError> {
        // Re-list instead of caching: the tab may have navigated or
        // closed since it was picked.
        let targets = self.list_targets().await?;
        let target = targets
            .into_iter()
            .find(|t| t.id == tab.id)
            .ok_or(ScanError::NoActiveTab)?;

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.evaluate_cookies(&target))
                .await
                .map_err(|_| ScanError::Browser("debugger response timed out".to_string()))?,
            None => self.evaluate_cookies(&target).await,
        }
    }
}

/// The first plain page in the target list is the tab the user sees.
/// Browser UI surfaces are listed too and must not be scanned.
fn pick_active(targets: Vec<CdpTarget>) -> Option<CdpTarget> {
    targets.into_iter().find(is_page)
}

fn is_page(target: &CdpTarget) -> bool {
    target.kind == "page"
        && !target.url.starts_with("devtools://")
        && !target.url.starts_with("chrome://")
        && !target.url.starts_with("chrome-extension://")
        && !target.url.starts_with("about:")
}

fn cookie_result(response: &Value) -> Result<String, ScanError> {
    if let Some(details) = response.pointer("/result/exceptionDetails") {
        let text = details
            .pointer("/exception/description")
            .and_then(Value::as_str)
            .unwrap_or("page threw during evaluation");
        return Err(ScanError::CookieAccess(text.to_string()));
    }
    if let Some(error) = response.get("error") {
        let text = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("debugger rejected the evaluation");
        return Err(ScanError::CookieAccess(text.to_string()));
    }

    let result = response.pointer("/result/result");
    match result.and_then(|r| r.get("type")).and_then(Value::as_str) {
        Some("string") => Ok(result
            .and_then(|r| r.get("value"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()),
        _ => Err(ScanError::CookieAccess(
            "evaluation did not return a string".to_string(),
        )),
    }
}
