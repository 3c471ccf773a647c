// Scrape pass: probes the legacy site, extracts every reachable page and
// writes the collection as JSON under ./scraped_content.

use anyhow::Result;
use lgfc_migration::utils::{DEFAULT_BASE_URL, SCRAPE_OUTPUT_DIR};
use lgfc_migration::{ScrapeConfig, scrape};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("reqwest", log::LevelFilter::Warn)
        .filter_module("hyper_util", log::LevelFilter::Warn)
        .init();

    let config = ScrapeConfig::builder()
        .output_dir(SCRAPE_OUTPUT_DIR)
        .base_url(DEFAULT_BASE_URL)
        .build()?;

    log::info!("🕷️  Starting content scraping...");

    let summary = scrape(config).await?;

    log::info!("📄 Scraped {} pages", summary.collection.len());
    if !summary.failures.is_empty() {
        log::warn!("⚠️  {} pages could not be scraped", summary.failures.len());
    }
    log::info!("✅ Content saved to {SCRAPE_OUTPUT_DIR}");
    log::info!("✅ Content scraping completed!");

    Ok(())
}
