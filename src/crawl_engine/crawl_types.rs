//! Core types for the scrape pass.
//!
//! Per-page failures are values, not panics or silent drops: `scrape_page`
//! returns `Result<ScrapedItem, ScrapeError>` and probes return a
//! `ProbeOutcome`, so callers handle every branch explicitly.

use reqwest::StatusCode;

use crate::page_extractor::schema::ScrapedCollection;

/// Error type for a single page scrape
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The URL could not be parsed
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Network-level failure (DNS, connection, timeout, body read)
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

impl ScrapeError {
    /// URL the failure belongs to
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. } | Self::Request { url, .. } | Self::Status { url, .. } => {
                url
            }
        }
    }

    /// Whether the request gave up on its deadline
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request { source, .. } if source.is_timeout())
    }
}

/// Result of a header-only existence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Answered with a success status
    Found,
    /// Answered, but not with a success status
    Missing(StatusCode),
    /// No answer: network error, timeout or DNS failure
    Unreachable(String),
}

impl ProbeOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }
}

/// A page that was discovered but could not be scraped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub url: String,
    pub reason: String,
}

/// Outcome of a full scrape pass
#[derive(Debug, Clone, Default)]
pub struct ScrapeSummary {
    /// Successfully scraped pages, in fetch order
    pub collection: ScrapedCollection,
    /// Pages dropped from the collection
    pub failures: Vec<PageFailure>,
}
