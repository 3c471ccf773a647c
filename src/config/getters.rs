//! Getter methods for `ScrapeConfig`

use std::path::Path;
use std::time::Duration;

use super::types::ScrapeConfig;
use crate::utils::candidate_url;

impl ScrapeConfig {
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn candidate_paths(&self) -> &[String] {
        &self.candidate_paths
    }

    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    #[must_use]
    pub fn politeness_delay(&self) -> Duration {
        self.politeness_delay
    }

    #[must_use]
    pub fn page_type(&self) -> &str {
        &self.page_type
    }

    /// Every URL the discovery pass will probe, in order
    #[must_use]
    pub fn candidate_urls(&self) -> Vec<String> {
        self.candidate_paths
            .iter()
            .map(|suffix| candidate_url(&self.base_url, suffix))
            .collect()
    }
}
