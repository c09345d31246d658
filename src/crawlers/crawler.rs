use crate::results::FetchedPage;
use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Connection, DNS, TLS or redirect failure
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The response arrived but its body could not be read
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    /// Classify a transport error from sending a request
    pub fn from_send(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout(error)
        } else {
            FetchError::Request(error)
        }
    }

    /// Classify a transport error from reading a response body
    pub fn from_body(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout(error)
        } else {
            FetchError::Body(error)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout(_))
    }
}

/// Retrieves the markup for a single URL
///
/// Implementations follow redirects and report the final URL. A non-2xx
/// status is not an error; only transport failures are.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
