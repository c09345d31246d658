use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Preview metadata extracted from a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewMetadata {
    /// Absolute image URL (og:image, falling back to twitter:image)
    pub image_url: Option<String>,

    /// Collapsed contents of the first `<title>` element
    pub title: Option<String>,
}

impl PreviewMetadata {
    /// Create a new metadata instance
    pub fn new(image_url: Option<String>, title: Option<String>) -> Self {
        Self { image_url, title }
    }
}

/// A successfully fetched document, after redirects
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the client ended up at
    pub final_url: Url,

    /// HTTP status code of the final response
    pub status: u16,

    /// Decoded response body
    pub body: String,
}

/// Outcome column of a report row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    /// The request completed with this status code
    Http(u16),
    /// The request failed before a response was read
    Error,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowStatus::Http(code) => write!(f, "{}", code),
            RowStatus::Error => f.write_str("ERR"),
        }
    }
}

/// One line item of the report, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// URL as it appeared in the input list
    pub requested_url: String,

    /// Post-redirect URL, or the error description for failed fetches
    pub final_url: String,

    pub status: RowStatus,

    pub metadata: PreviewMetadata,
}

impl ReportRow {
    /// Build a row for a page that was fetched and parsed
    pub fn fetched(requested_url: &str, page: &FetchedPage, metadata: PreviewMetadata) -> Self {
        Self {
            requested_url: requested_url.to_string(),
            final_url: page.final_url.to_string(),
            status: RowStatus::Http(page.status),
            metadata,
        }
    }

    /// Build a row for a fetch that failed
    pub fn failed(requested_url: &str, error: impl fmt::Display) -> Self {
        Self {
            requested_url: requested_url.to_string(),
            final_url: error.to_string(),
            status: RowStatus::Error,
            metadata: PreviewMetadata::default(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == RowStatus::Error
    }
}
