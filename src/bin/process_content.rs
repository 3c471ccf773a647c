// Conversion pass: turns ./scraped_content/scraped_data.json into dated
// markdown files under ../content/posts and ../content/pages.

use anyhow::Result;
use lgfc_migration::{ProcessConfig, process_all_content};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ProcessConfig::default();
    let report = process_all_content(&config).await?;

    if report.overwritten > 0 {
        log::warn!(
            "⚠️  {} files were overwritten by items sharing a slug",
            report.overwritten
        );
    }
    log::info!("✅ Processed {} content files", report.written_count());

    Ok(())
}
