use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::ScanError;
use crate::core::report::Report;

#[derive(Serialize)]
struct AuditRequest<'a> {
    url: &'a str,
    cookies: &'a [String],
}

/// Response of the audit service's `/health` probe.
#[derive(Debug, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub version: Option<String>,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// HTTP client for the audit service.
pub struct AuditClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl AuditClient {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Self {
        AuditClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits the page URL and its cookie names for analysis.
    /// Non-2xx responses and transport failures both surface as
    /// `AuditRequest`; a 2xx body that is not a valid report surfaces
    /// as `ReportParse`.
    pub async fn audit(&self, url: &str, cookies: &[String]) -> Result<Report, ScanError> {
        debug!("auditing {} with {} cookie(s)", url, cookies.len());

        let body = AuditRequest { url, cookies };
        let mut request = self.http.post(format!("{}/audit", self.endpoint)).json(&body);
        if let Some(limit) = self.timeout {
            request = request.timeout(limit);
        }

        let text = request
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let report = serde_json::from_str(&text)?;
        Ok(report)
    }

    pub async fn health(&self) -> Result<ServiceHealth, ScanError> {
        let mut request = self.http.get(format!("{}/health", self.endpoint));
        if let Some(limit) = self.timeout {
            request = request.timeout(limit);
        }

        let text = request
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let health = serde_json::from_str(&text)?;
        Ok(health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    async fn spawn_service(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_audit_posts_url_and_cookie_names() {
        let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let seen = captured.clone();
        let app = Router::new().route(
            "/audit",
            post(move |Json(body): Json<Value>| {
                *seen.lock().unwrap() = Some(body);
                async move {
                    Json(json!({
                        "privacy_score": 42,
                        "classification": "Risco Alto",
                        "cookies": {"total": 2, "tracking": 1, "details": []},
                        "warnings": [],
                        "risks": ["Rastreamento cruzado"],
                        "recommendations": []
                    }))
                }
            }),
        );
        let endpoint = spawn_service(app).await;

        let client = AuditClient::new(&endpoint, None);
        let cookies = vec!["id".to_string(), "track".to_string()];
        let report = client.audit("https://example.com", &cookies).await.unwrap();

        assert_eq!(report.privacy_score, 42);
        assert_eq!(report.classification, "Risco Alto");
        assert_eq!(
            captured.lock().unwrap().take().unwrap(),
            json!({"url": "https://example.com", "cookies": ["id", "track"]})
        );
    }

    #[tokio::test]
    async fn test_server_error_is_audit_failure() {
        let app = Router::new().route(
            "/audit",
            post(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let endpoint = spawn_service(app).await;

        let client = AuditClient::new(&endpoint, None);
        let err = client.audit("https://example.com", &[]).await.unwrap_err();
        assert!(matches!(err, ScanError::AuditRequest(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_failure() {
        let app = Router::new().route("/audit", post(|| async { "not json" }));
        let endpoint = spawn_service(app).await;

        let client = AuditClient::new(&endpoint, None);
        let err = client.audit("https://example.com", &[]).await.unwrap_err();
        assert!(matches!(err, ScanError::ReportParse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_audit_failure() {
        let client = AuditClient::new("http://127.0.0.1:1", None);
        let err = client.audit("https://example.com", &[]).await.unwrap_err();
        assert!(matches!(err, ScanError::AuditRequest(_)));
    }

    #[tokio::test]
    async fn test_health_probe() {
        let app = Router::new().route(
            "/health",
            get(|| async { Json(json!({"status": "healthy", "version": "2.0"})) }),
        );
        let endpoint = spawn_service(app).await;

        let client = AuditClient::new(&endpoint, None);
        let health = client.health().await.unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = AuditClient::new("http://localhost:5000/", None);
        assert_eq!(client.endpoint(), "http://localhost:5000");
    }
}
