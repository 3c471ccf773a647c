pub mod config;
pub mod content_processor;
pub mod content_saver;
pub mod crawl_engine;
pub mod page_extractor;
pub mod utils;

pub use config::{ProcessConfig, ScrapeConfig};
pub use content_processor::{
    MarkdownPost, ProcessReport, Section, build_post, classify, clean_text, process_all_content,
    slugify,
};
pub use content_saver::{page_file_name, persist, save_markdown_post};
pub use crawl_engine::{
    PageFailure, ProbeOutcome, ScrapeError, ScrapeSummary, SiteScraper, build_http_client,
    build_probe_client,
};
pub use page_extractor::schema::*;

/// Scrape the legacy site and persist the collection into the configured output directory.
///
/// robots.txt is not consulted: only the configured candidate paths are ever requested.
pub async fn scrape(config: ScrapeConfig) -> anyhow::Result<ScrapeSummary> {
    let scraper = SiteScraper::new(config)?;
    let summary = scraper.scrape_all().await;
    persist(&summary.collection, scraper.config().output_dir()).await?;
    Ok(summary)
}
