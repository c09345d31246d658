use crate::config::FetchConfig;
use crate::crawlers::crawler::{FetchError, Fetcher};
use crate::results::FetchedPage;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, redirect};

/// Fetches pages over HTTP(S) with a shared `reqwest` client
///
/// Every request carries the configured User-Agent and Accept headers, is
/// bounded by the configured timeout, and follows redirects up to the
/// configured limit.
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
}

impl WebFetcher {
    /// Build a fetcher from configuration
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&config.accept) {
            Ok(value) => {
                headers.insert(ACCEPT, value);
            }
            Err(e) => {
                ::log::warn!("Ignoring invalid Accept header {:?}: {}", config.accept, e);
            }
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(FetchError::Client)?;

        ::log::debug!(
            "Built HTTP client (timeout {}s, max {} redirects)",
            config.timeout_secs,
            config.max_redirects
        );

        Ok(Self { client })
    }
}

impl Fetcher for WebFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_send)?;

        let final_url = response.url().clone();
        let status = response.status().as_u16();
        if final_url.as_str() != url {
            ::log::debug!("{} redirected to {}", url, final_url);
        }

        let body = response.text().await.map_err(FetchError::from_body)?;
        ::log::trace!("Read {} bytes from {} (status {})", body.len(), final_url, status);

        Ok(FetchedPage {
            final_url,
            status,
            body,
        })
    }
}
