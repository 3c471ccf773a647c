//! Crawl Engine Module
//!
//! This module contains the scrape pass: client construction, page discovery
//! through existence checks, and the sequential fetch-and-extract loop.

// Sub-modules
pub mod charset;
pub mod client;
pub mod crawl_types;
pub mod crawler;
pub mod discovery;

// Re-exports for public API
pub use charset::decode_body;
pub use client::{build_http_client, build_probe_client};
pub use crawl_types::{PageFailure, ProbeOutcome, ScrapeError, ScrapeSummary};
pub use crawler::SiteScraper;
pub use discovery::{discover_pages, probe_url};
