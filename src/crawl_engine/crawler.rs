//! Sequential site scraper.
//!
//! Discovers the reachable candidate pages, then fetches and extracts each one
//! in turn with a fixed pause between fetches. A failed page is logged and
//! skipped; it never aborts the batch and is never retried.

use anyhow::Result;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use super::charset::decode_body;
use super::client::{build_http_client, build_probe_client};
use super::crawl_types::{PageFailure, ScrapeError, ScrapeSummary};
use super::discovery::discover_pages;
use crate::config::ScrapeConfig;
use crate::page_extractor::extract_page;
use crate::page_extractor::schema::ScrapedItem;

/// Scraper bound to one configuration and its HTTP clients
pub struct SiteScraper {
    client: Client,
    probe_client: Client,
    config: ScrapeConfig,
}

impl SiteScraper {
    /// Create a scraper with freshly built clients.
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        let client = build_http_client(&config)?;
        let probe_client = build_probe_client(&config)?;
        Ok(Self::with_clients(config, client, probe_client))
    }

    /// Create a scraper around existing fetch and probe clients.
    #[must_use]
    pub fn with_clients(config: ScrapeConfig, client: Client, probe_client: Client) -> Self {
        Self {
            client,
            probe_client,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Candidate URLs that answered the existence check.
    pub async fn discover_pages(&self) -> Vec<String> {
        discover_pages(&self.probe_client, &self.config).await
    }

    /// Fetch one page and extract its content.
    ///
    /// # Errors
    ///
    /// Returns a `ScrapeError` for an unparseable URL, a network failure or
    /// timeout, or a non-success status.
    pub async fn scrape_page(&self, url: &str) -> Result<ScrapedItem, ScrapeError> {
        log::info!(target: "lgfc::scrape", "Scraping: {url}");

        Url::parse(url).map_err(|e| ScrapeError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let response = self
            .client
            .get(url)
            .timeout(self.config.fetch_timeout())
            .send()
            .await
            .map_err(|source| ScrapeError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = response.bytes().await.map_err(|source| ScrapeError::Request {
            url: url.to_string(),
            source,
        })?;
        let html = decode_body(&body, content_type.as_deref());

        extract_page(url, &html, self.config.page_type()).map_err(|e| ScrapeError::InvalidUrl {
            url: url.to_string(),
            message: format!("{e:#}"),
        })
    }

    /// Discover and scrape every page of the site.
    pub async fn scrape_all(&self) -> ScrapeSummary {
        let urls = self.discover_pages().await;
        log::info!(target: "lgfc::discovery", "Discovered {} pages", urls.len());

        let delay = self.config.politeness_delay();
        let mut summary = ScrapeSummary::default();

        for (index, url) in urls.iter().enumerate() {
            if index > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match self.scrape_page(url).await {
                Ok(item) => summary.collection.push(item),
                Err(e) => {
                    if e.is_timeout() {
                        log::warn!(target: "lgfc::scrape", "Timed out scraping {url}");
                    } else {
                        log::warn!(target: "lgfc::scrape", "Error scraping {url}: {e}");
                    }
                    summary.failures.push(PageFailure {
                        url: url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        summary
    }
}
