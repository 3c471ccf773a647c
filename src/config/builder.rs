//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! `build()` only exists once both the output directory and the base URL
//! have been supplied.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use super::types::ScrapeConfig;

// Type states for the builder
pub struct WithOutputDir;
pub struct WithBaseUrl;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) base_url: Option<String>,
    pub(crate) user_agent: String,
    pub(crate) candidate_paths: Vec<String>,
    pub(crate) probe_timeout: Duration,
    pub(crate) fetch_timeout: Duration,
    pub(crate) politeness_delay: Duration,
    pub(crate) page_type: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        let defaults = ScrapeConfig::default();
        Self {
            output_dir: None,
            base_url: None,
            user_agent: defaults.user_agent,
            candidate_paths: defaults.candidate_paths,
            probe_timeout: defaults.probe_timeout,
            fetch_timeout: defaults.fetch_timeout,
            politeness_delay: defaults.politeness_delay,
            page_type: defaults.page_type,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl<State> ScrapeConfigBuilder<State> {
    fn transition<Next>(self) -> ScrapeConfigBuilder<Next> {
        ScrapeConfigBuilder {
            output_dir: self.output_dir,
            base_url: self.base_url,
            user_agent: self.user_agent,
            candidate_paths: self.candidate_paths,
            probe_timeout: self.probe_timeout,
            fetch_timeout: self.fetch_timeout,
            politeness_delay: self.politeness_delay,
            page_type: self.page_type,
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Replace the probed suffix list. Include `""` to probe the root page.
    #[must_use]
    pub fn candidate_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidate_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    #[must_use]
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Pause between page fetches. `Duration::ZERO` disables throttling.
    #[must_use]
    pub fn politeness_delay(mut self, delay: Duration) -> Self {
        self.politeness_delay = delay;
        self
    }

    #[must_use]
    pub fn page_type(mut self, page_type: impl Into<String>) -> Self {
        self.page_type = page_type.into();
        self
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> ScrapeConfigBuilder<WithOutputDir> {
        self.output_dir = Some(dir.into());
        self.transition()
    }
}

impl ScrapeConfigBuilder<WithOutputDir> {
    pub fn base_url(mut self, url: impl Into<String>) -> ScrapeConfigBuilder<WithBaseUrl> {
        let url_string = url.into();

        // Normalize URL: add https:// if no scheme is present
        let normalized_url =
            if url_string.starts_with("http://") || url_string.starts_with("https://") {
                url_string
            } else {
                format!("https://{url_string}")
            };

        self.base_url = Some(normalized_url.trim_end_matches('/').to_string());
        self.transition()
    }
}

// Build method only available when all required fields are set
impl ScrapeConfigBuilder<WithBaseUrl> {
    pub fn build(self) -> Result<ScrapeConfig> {
        let base_url = self
            .base_url
            .ok_or_else(|| anyhow!("base_url is required"))?;
        Url::parse(&base_url).map_err(|e| anyhow!("Invalid base URL '{base_url}': {e}"))?;

        Ok(ScrapeConfig {
            output_dir: self
                .output_dir
                .ok_or_else(|| anyhow!("output_dir is required"))?,
            base_url,
            user_agent: self.user_agent,
            candidate_paths: self.candidate_paths,
            probe_timeout: self.probe_timeout,
            fetch_timeout: self.fetch_timeout,
            politeness_delay: self.politeness_delay,
            page_type: self.page_type,
        })
    }
}
