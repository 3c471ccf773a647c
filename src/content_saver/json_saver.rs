use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::page_extractor::schema::ScrapedCollection;
use crate::utils::{SCRAPED_DATA_FILE, last_path_segment};

/// File name for the per-page copy of the item at `index`.
///
/// `page_NN_<segment>.json`, where the segment is the last non-empty path
/// segment of the URL, or `home` for the site root.
#[must_use]
pub fn page_file_name(index: usize, url: &str) -> String {
    let segment = last_path_segment(url)
        .map(sanitize_filename::sanitize)
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| "home".to_string());

    format!("page_{index:02}_{segment}.json")
}

/// Pretty-print `value` as JSON into `path`
async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;

    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Persist a scrape pass.
///
/// Writes the whole collection to `scraped_data.json`, plus one file per item.
///
/// # Returns
///
/// * `Result<Vec<PathBuf>>` - Every file written, aggregate first
pub async fn persist(collection: &ScrapedCollection, output_dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let aggregate = output_dir.join(SCRAPED_DATA_FILE);
    write_json(&aggregate, collection).await?;

    let mut written = Vec::with_capacity(collection.len() + 1);
    written.push(aggregate);

    for (index, item) in collection.iter().enumerate() {
        let path = output_dir.join(page_file_name(index, &item.url));
        write_json(&path, item).await?;
        written.push(path);
    }

    log::debug!(
        target: "lgfc::persist",
        "Wrote {} files to {}",
        written.len(),
        output_dir.display()
    );

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_use_index_and_segment() {
        assert_eq!(page_file_name(0, "https://site.com"), "page_00_home.json");
        assert_eq!(page_file_name(3, "https://site.com/about"), "page_03_about.json");
        assert_eq!(page_file_name(12, "https://site.com/news/"), "page_12_news.json");
    }
}
