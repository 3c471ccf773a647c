//! The markdown conversion pass.
//!
//! Reads the aggregate JSON produced by the scrape pass and writes one
//! markdown document per qualifying item. Any I/O or parse failure aborts the
//! whole pass; there is no per-item recovery.

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::classify::{Section, classify};
use super::post::MarkdownPost;
use crate::config::ProcessConfig;
use crate::content_saver::save_markdown_post;
use crate::page_extractor::schema::{ScrapedCollection, ScrapedItem};

/// What a conversion pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Every write, in order, including ones that replaced an earlier write
    pub written: Vec<PathBuf>,
    /// Items dropped by the content gate
    pub skipped: usize,
    /// Writes that replaced a file written earlier in the same pass
    pub overwritten: usize,
}

impl ProcessReport {
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.written.len()
    }
}

/// Load the scrape pass output.
pub async fn load_collection(path: &Path) -> Result<ScrapedCollection> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read scraped data from {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse scraped data in {}", path.display()))
}

/// Content gate: the raw content must be present and the cleaned body must be
/// longer than `min_chars` characters.
#[must_use]
pub fn is_migratable(item: &ScrapedItem, cleaned_body: &str, min_chars: usize) -> bool {
    !item.content.is_empty() && cleaned_body.chars().count() > min_chars
}

/// Run the conversion pass described by `config`.
pub async fn process_all_content(config: &ProcessConfig) -> Result<ProcessReport> {
    let collection = load_collection(&config.input_file).await?;

    for dir in [&config.posts_dir, &config.pages_dir] {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let mut report = ProcessReport::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for item in &collection {
        let post = MarkdownPost::from_item(item, &config.tags, Local::now());

        if !is_migratable(item, &post.body, config.min_content_chars) {
            log::debug!(
                target: "lgfc::process",
                "Skipping {}: {} characters after cleaning",
                item.url,
                post.body.chars().count()
            );
            report.skipped += 1;
            continue;
        }

        let dir = match classify(item) {
            Section::Posts => &config.posts_dir,
            Section::Pages => &config.pages_dir,
        };

        let path = save_markdown_post(&post, dir).await?;

        if !seen.insert(path.clone()) {
            log::warn!(
                target: "lgfc::process",
                "{} overwritten by {} (same slug and date)",
                path.display(),
                item.url
            );
            report.overwritten += 1;
        }

        report.written.push(path);
    }

    Ok(report)
}
