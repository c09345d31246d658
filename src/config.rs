use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for fetching preview pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Pages to visit, in report order
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept header sent with every request
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Maximum number of redirects to follow
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

/// Default value for urls
pub fn default_urls() -> Vec<String> {
    [
        "https://www.tractorjunction.com/",
        "https://www.khetigaadi.com/",
        "https://www.agrostar.in/",
        "https://www.indiamart.com/agriculture-machinery/",
        "https://www.tradeindia.com/agriculture-machinery.html",
        "https://www.mahindratractor.com/",
        "https://www.tafe.com/",
        "https://www.sonalika.com/",
        "https://www.deere.co.in/",
        "https://www.vsttillers.com/",
        "https://www.agcocorp.com/",
        "https://www.cnhindustrial.com/",
        "https://www.kubota.com/",
        "https://www.claas.com/",
        "https://www.agriexpo.online/",
        "https://www.farmequip.org/",
        "https://www.machinerypete.com/",
        "https://www.alibaba.com/agriculture-machinery",
        "https://www.made-in-china.com/agriculture-machinery/",
        "https://www.fao.org/home/en",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    25
}

/// Default value for user_agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

/// Default value for accept
fn default_accept() -> String {
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string()
}

/// Default value for max_redirects
fn default_max_redirects() -> usize {
    30
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            urls: default_urls(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            accept: default_accept(),
            max_redirects: default_max_redirects(),
        }
    }
}

impl FetchConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
