//! Field extractors for a fetched legacy page.
//!
//! All extractors work on a parsed `scraper::Html`. References are resolved
//! against the page's own URL with `url::Url::join`.

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use super::main_content::{MainRegion, select_main_region};
use super::schema::{ImageRef, ScrapedItem};
use crate::utils::{is_already_absolute, resolve_reference};

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("BUG: hardcoded CSS selector 'title' is invalid")
});

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("img[src]").expect("BUG: hardcoded CSS selector 'img[src]' is invalid")
});

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("BUG: hardcoded CSS selector 'a[href]' is invalid")
});

/// Trimmed text of the first `<title>`, or the empty string.
#[must_use]
pub fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Every image with a non-empty `src`, resolved to an absolute URL.
pub fn extract_images(document: &Html, region: &MainRegion<'_>, page_url: &Url) -> Vec<ImageRef> {
    document
        .select(&IMG_SELECTOR)
        .filter(|img| !region.is_pruned(img))
        .filter_map(|img| {
            let element = img.value();
            let src = element.attr("src").filter(|src| !src.is_empty())?;
            match resolve_reference(page_url, src) {
                Ok(resolved) => Some(ImageRef {
                    src: resolved,
                    alt: element.attr("alt").unwrap_or_default().to_string(),
                    title: element.attr("title").unwrap_or_default().to_string(),
                }),
                Err(e) => {
                    log::debug!(target: "lgfc::scrape", "Skipping image: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Internal links: every non-empty `href` that is not already absolute,
/// resolved against the page URL.
pub fn extract_links(document: &Html, region: &MainRegion<'_>, page_url: &Url) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter(|anchor| !region.is_pruned(anchor))
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| !href.is_empty() && !is_already_absolute(href))
        .filter_map(|href| match resolve_reference(page_url, href) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                log::debug!(target: "lgfc::scrape", "Skipping link: {e}");
                None
            }
        })
        .collect()
}

/// Build a complete `ScrapedItem` from a page body.
///
/// # Errors
///
/// Fails only when `url` itself cannot be parsed as a base for resolution.
pub fn extract_page(url: &str, html: &str, page_type: &str) -> Result<ScrapedItem> {
    let page_url = Url::parse(url).with_context(|| format!("Invalid page URL: {url}"))?;
    let document = Html::parse_document(html);

    let mut item = ScrapedItem::new(url, page_type);
    item.title = extract_title(&document);

    let region = select_main_region(&document);
    item.content = region.text();
    item.images = extract_images(&document, &region, &page_url);
    item.links = extract_links(&document, &region, &page_url);

    Ok(item)
}
