use crate::config::{ConfigError, FetchConfig};
use crate::crawlers::{FetchError, Fetcher, WebFetcher};
use crate::parsers::Parser;
use crate::results::ReportRow;
use std::path::Path;

/// Builder for collecting preview metadata from a list of pages
///
/// Pages are visited one at a time, in list order. A failure on one URL is
/// recorded as an error row and never stops the remaining URLs.
#[derive(Debug, Clone, Default)]
pub struct Previews {
    config: FetchConfig,
}

impl Previews {
    /// Create a new builder with the embedded default URL list
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        let config = FetchConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self, ConfigError> {
        let config = FetchConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Replace the list of pages to visit
    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch every page over HTTP and extract its metadata
    ///
    /// Only building the HTTP client can fail; per-URL failures end up in
    /// the returned rows.
    pub async fn collect(&self) -> Result<Vec<ReportRow>, FetchError> {
        let fetcher = WebFetcher::new(&self.config)?;
        Ok(self.collect_with(&fetcher).await)
    }

    /// Visit every page with the given fetcher
    pub async fn collect_with<F: Fetcher>(&self, fetcher: &F) -> Vec<ReportRow> {
        let total = self.config.urls.len();
        let mut rows = Vec::with_capacity(total);

        for (index, url) in self.config.urls.iter().enumerate() {
            ::log::info!("[{}/{}] Fetching {}", index + 1, total, url);
            rows.push(visit(fetcher, url).await);
        }

        let failed = rows.iter().filter(|row| row.is_error()).count();
        ::log::info!("Collected {} pages ({} failed)", total, failed);

        rows
    }
}

/// Fetch and parse a single page, turning any failure into an error row
async fn visit<F: Fetcher>(fetcher: &F, url: &str) -> ReportRow {
    match fetcher.fetch(url).await {
        Ok(page) => {
            let metadata = Parser::extract(&page.body, &page.final_url);
            ReportRow::fetched(url, &page, metadata)
        }
        Err(e) => {
            ::log::warn!("Failed to fetch {}: {}", url, e);
            ReportRow::failed(url, &e)
        }
    }
}
