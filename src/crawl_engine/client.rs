//! HTTP client construction.
//!
//! A run uses two `reqwest::Client`s handed to `SiteScraper`: page fetches
//! follow redirects, existence checks do not, so a candidate that only
//! redirects elsewhere is not reported as found. Timeouts are applied per
//! request since probes and fetches differ.

use anyhow::{Context, Result};
use reqwest::{Client, redirect};

use crate::config::ScrapeConfig;

/// Build the client used for page fetches.
///
/// The identifying user agent is installed as a default header.
pub fn build_http_client(config: &ScrapeConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent())
        .build()
        .context("Failed to build HTTP client")
}

/// Build the client used for existence checks: same identity, no redirects.
pub fn build_probe_client(config: &ScrapeConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent())
        .redirect(redirect::Policy::none())
        .build()
        .context("Failed to build probe client")
}
