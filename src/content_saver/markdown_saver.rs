use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::content_processor::post::MarkdownPost;

/// Write a migrated post into `dir` under its dated slug file name.
///
/// An existing file with the same name is replaced.
///
/// # Returns
///
/// * `Result<PathBuf>` - Path of the written file
pub async fn save_markdown_post(post: &MarkdownPost, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(post.file_name());

    tokio::fs::write(&path, post.render())
        .await
        .with_context(|| format!("Failed to write markdown to {}", path.display()))?;

    log::debug!(
        target: "lgfc::process",
        "Saved markdown for {} to {}",
        post.migrated_from,
        path.display()
    );

    Ok(path)
}
