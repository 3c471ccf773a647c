//! Shared configuration constants for the migration
//!
//! Both passes are driven entirely by these values: the binaries take no flags
//! and read no configuration file.

use std::time::Duration;

/// Root of the legacy site being migrated
pub const DEFAULT_BASE_URL: &str = "https://www.LouGehrigFanClub.com";

/// Client identifier sent with every request
pub const MIGRATION_USER_AGENT: &str = "Mozilla/5.0 (compatible; LGFCMigration/1.0)";

/// Path suffixes probed under the base URL. The empty suffix is the root page.
pub const CANDIDATE_PATHS: &[&str] = &[
    "",
    "about",
    "biography",
    "career",
    "statistics",
    "photos",
    "gallery",
    "news",
    "blog",
    "contact",
    "als",
    "awareness",
];

/// Timeout for the header-only existence check
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for a full page fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed pause between successive page fetches
pub const POLITENESS_DELAY: Duration = Duration::from_secs(1);

/// Item tag written into every scraped record
pub const DEFAULT_PAGE_TYPE: &str = "page";

/// Directory the Fetcher writes into
pub const SCRAPE_OUTPUT_DIR: &str = "scraped_content";

/// Aggregate JSON file holding the whole collection
pub const SCRAPED_DATA_FILE: &str = "scraped_data.json";

/// Where the Transformer reads the Fetcher's aggregate file from
pub const PROCESS_INPUT_FILE: &str = "scraped_content/scraped_data.json";

/// Output directory for items classified as posts
pub const POSTS_OUTPUT_DIR: &str = "../content/posts";

/// Output directory for items classified as pages
pub const PAGES_OUTPUT_DIR: &str = "../content/pages";

/// Cleaned bodies must be strictly longer than this (in characters) to be migrated
pub const MIN_CONTENT_CHARS: usize = 100;

/// Tags attached to every migrated markdown document
pub const LEGACY_TAGS: &[&str] = &["legacy", "lou-gehrig"];

/// Brand of the legacy site builder, used to spot its copyright footer
pub const LEGACY_VENDOR_MARKER: &str = "SitePro";
