//! Body text cleanup and title slugs.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::LEGACY_VENDOR_MARKER;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("BUG: hardcoded whitespace regex is invalid")
});

/// Copyright notice of the legacy site builder, through the end of the text
static VENDOR_COPYRIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)Copyright.*{}.*",
        regex::escape(LEGACY_VENDOR_MARKER)
    ))
    .expect("BUG: hardcoded copyright regex is invalid")
});

/// "Powered by" footer, through the end of the text
static POWERED_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Powered by.*").expect("BUG: hardcoded powered-by regex is invalid")
});

/// Normalize scraped body text.
///
/// Collapses whitespace runs to one space, then cuts the legacy copyright
/// notice and the "Powered by" footer (each runs to the end of the text).
/// Idempotent.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let without_copyright = VENDOR_COPYRIGHT.replace_all(collapsed.trim(), "");
    let without_footer = POWERED_BY.replace_all(&without_copyright, "");
    without_footer.trim().to_string()
}

/// Lowercase, hyphen-separated slug of a title.
///
/// Only ASCII letters, digits and whitespace survive; each whitespace run,
/// including one at either end, becomes a single hyphen. Distinct titles may
/// share a slug.
#[must_use]
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    WHITESPACE_RUN
        .replace_all(&kept.to_ascii_lowercase(), "-")
        .into_owned()
}
