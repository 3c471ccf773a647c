//! Page discovery by probing a fixed list of candidate paths.
//!
//! There is no link following and no robots.txt lookup: the candidate list
//! in the config is the whole universe of pages.

use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;

use super::crawl_types::ProbeOutcome;
use crate::config::ScrapeConfig;

/// Header-only existence check for a single URL.
///
/// Only a 2xx answer counts as found. With a client from
/// `build_probe_client` a redirect answer is reported as `Missing`.
pub async fn probe_url(client: &Client, url: &str, timeout: Duration) -> ProbeOutcome {
    match client.head(url).timeout(timeout).send().await {
        Ok(response) if response.status().is_success() => ProbeOutcome::Found,
        Ok(response) => ProbeOutcome::Missing(response.status()),
        Err(e) => ProbeOutcome::Unreachable(e.to_string()),
    }
}

/// Probe every candidate URL and keep the ones that answer successfully.
///
/// Failed probes are excluded without surfacing an error. The result is
/// deduplicated and keeps candidate order.
pub async fn discover_pages(client: &Client, config: &ScrapeConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for url in config.candidate_urls() {
        if !seen.insert(url.clone()) {
            continue;
        }

        match probe_url(client, &url, config.probe_timeout()).await {
            ProbeOutcome::Found => found.push(url),
            ProbeOutcome::Missing(status) => {
                log::debug!(target: "lgfc::discovery", "Excluding {url}: HTTP {status}");
            }
            ProbeOutcome::Unreachable(reason) => {
                log::debug!(target: "lgfc::discovery", "Excluding {url}: {reason}");
            }
        }
    }

    found
}
