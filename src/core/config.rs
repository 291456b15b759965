use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_AUDIT_ENDPOINT: &str = "http://localhost:5000";
pub const DEFAULT_DEVTOOLS_URL: &str = "http://localhost:9222";

/// Optional `.datashield.yml` in the working directory. Flags beat the
/// file, the file beats the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: Option<String>,
    pub devtools: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(".datashield.yml");
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = serde_yaml::from_str::<Config>(&content) {
                    return config;
                }
            }
        }
        Config::default()
    }

    pub fn audit_endpoint(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_AUDIT_ENDPOINT.to_string())
    }

    pub fn devtools_url(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.devtools.clone())
            .unwrap_or_else(|| DEFAULT_DEVTOOLS_URL.to_string())
    }

    /// No timeout unless one is configured; a hung request then blocks
    /// the scan until the user gives up.
    pub fn request_timeout(&self, flag: Option<u64>) -> Option<Duration> {
        flag.or(self.timeout_secs).map(Duration::from_secs)
    }
}
