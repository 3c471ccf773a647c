//! URL and path manipulation utilities.
//!
//! Helpers for turning the base URL into probe candidates and for resolving
//! the references found on a scraped page.

use anyhow::Result;
use url::Url;

/// Join the base URL with a candidate suffix.
///
/// The empty suffix yields the base URL itself; anything else is appended
/// after a single `/`.
#[must_use]
pub fn candidate_url(base_url: &str, suffix: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if suffix.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{}", suffix.trim_start_matches('/'))
    }
}

/// Whether a reference is treated as already absolute.
///
/// Mirrors the legacy site's own convention: anything starting with `http`
/// (which covers `https`) is external to the migration and left alone.
#[must_use]
pub fn is_already_absolute(href: &str) -> bool {
    href.starts_with("http")
}

/// Resolve `reference` against the page it was found on.
///
/// Handles relative, root-relative and scheme-relative references.
pub fn resolve_reference(page_url: &Url, reference: &str) -> Result<String> {
    let resolved = page_url
        .join(reference)
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{reference}' against {page_url}: {e}"))?;
    Ok(resolved.to_string())
}

/// Last non-empty path segment of a URL, if any.
///
/// `https://site/about` and `https://site/about/` both yield `about`;
/// the site root yields `None`.
#[must_use]
pub fn last_path_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}
