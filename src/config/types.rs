//! Core configuration types for both migration passes
//!
//! `ScrapeConfig` drives the Fetcher and is built through its type-state
//! builder; `ProcessConfig` drives the Transformer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::{
    CANDIDATE_PATHS, DEFAULT_BASE_URL, DEFAULT_PAGE_TYPE, FETCH_TIMEOUT, LEGACY_TAGS,
    MIGRATION_USER_AGENT, MIN_CONTENT_CHARS, PAGES_OUTPUT_DIR, POLITENESS_DELAY,
    POSTS_OUTPUT_DIR, PROBE_TIMEOUT, PROCESS_INPUT_FILE, SCRAPE_OUTPUT_DIR,
};

/// Configuration for the scrape pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Directory receiving `scraped_data.json` and the per-page files
    pub(crate) output_dir: PathBuf,

    /// Base URL of the legacy site.
    ///
    /// **INVARIANT:** carries a scheme and no trailing slash (normalized in builder),
    /// so candidate URLs are plain `{base}/{suffix}` joins.
    pub(crate) base_url: String,

    pub(crate) user_agent: String,

    /// Suffixes probed under `base_url`; the empty suffix is the root page
    pub(crate) candidate_paths: Vec<String>,

    /// Timeout for each HEAD existence check
    pub(crate) probe_timeout: Duration,

    /// Timeout for each full GET
    pub(crate) fetch_timeout: Duration,

    /// Pause inserted between successive page fetches
    pub(crate) politeness_delay: Duration,

    /// Value of the `type` field on every scraped item
    pub(crate) page_type: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(SCRAPE_OUTPUT_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: MIGRATION_USER_AGENT.to_string(),
            candidate_paths: CANDIDATE_PATHS.iter().map(|p| (*p).to_string()).collect(),
            probe_timeout: PROBE_TIMEOUT,
            fetch_timeout: FETCH_TIMEOUT,
            politeness_delay: POLITENESS_DELAY,
            page_type: DEFAULT_PAGE_TYPE.to_string(),
        }
    }
}

/// Configuration for the markdown conversion pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Aggregate JSON written by the scrape pass
    pub input_file: PathBuf,
    pub posts_dir: PathBuf,
    pub pages_dir: PathBuf,

    /// Cleaned bodies must be strictly longer than this many characters
    pub min_content_chars: usize,

    /// Tags written into every frontmatter block
    pub tags: Vec<String>,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(PROCESS_INPUT_FILE),
            posts_dir: PathBuf::from(POSTS_OUTPUT_DIR),
            pages_dir: PathBuf::from(PAGES_OUTPUT_DIR),
            min_content_chars: MIN_CONTENT_CHARS,
            tags: LEGACY_TAGS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

impl ProcessConfig {
    #[must_use]
    pub fn with_input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_file = path.into();
        self
    }

    #[must_use]
    pub fn with_posts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.posts_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_pages_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.pages_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_min_content_chars(mut self, chars: usize) -> Self {
        self.min_content_chars = chars;
        self
    }
}
