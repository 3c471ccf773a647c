//! Test utilities and helper functions for the migration test suite

use lgfc_migration::config::ScrapeConfig;
use lgfc_migration::page_extractor::schema::ScrapedItem;
use mockito::{Mock, ServerGuard};
use std::path::Path;
use std::time::Duration;

/// Creates a test HTML document with specified title and body
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// A page shaped like the legacy site: menu, content block, vendor footer
#[allow(dead_code)]
pub fn create_legacy_page(title: &str, paragraph: &str) -> String {
    create_test_html(
        title,
        &format!(
            r#"<nav><a href="/">Home</a><a href="/about">About</a></nav>
    <div class="content">
        <h1>{title}</h1>
        <p>{paragraph}</p>
        <img src="/images/lou.jpg" alt="Lou Gehrig" title="1927">
        <a href="/career">Career</a>
        <a href="https://www.baseball-reference.com/players/g/gehrilo01.shtml">Stats</a>
    </div>
    <footer>Copyright 2009 LGFC. Powered by SitePro</footer>"#
        ),
    )
}

/// Builds a scrape config pointed at a mock server, with no throttling
#[allow(dead_code)]
pub fn create_test_config(base_url: &str, output_dir: &Path) -> ScrapeConfig {
    ScrapeConfig::builder()
        .output_dir(output_dir)
        .base_url(base_url)
        .politeness_delay(Duration::ZERO)
        .probe_timeout(Duration::from_secs(2))
        .fetch_timeout(Duration::from_secs(2))
        .build()
        .expect("Failed to create test config")
}

/// Mock a successful existence check
#[allow(dead_code)]
pub async fn mock_head_ok(server: &mut ServerGuard, path: &str) -> Mock {
    server
        .mock("HEAD", path)
        .with_status(200)
        .create_async()
        .await
}

/// Mock an existence check answering with `status`
#[allow(dead_code)]
pub async fn mock_head_status(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("HEAD", path)
        .with_status(status)
        .create_async()
        .await
}

/// Mock a page body
#[allow(dead_code)]
pub async fn mock_page(server: &mut ServerGuard, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Mock a failing page fetch
#[allow(dead_code)]
pub async fn mock_page_error(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// A scraped item with the given url, title and content
#[allow(dead_code)]
pub fn scraped_item(url: &str, title: &str, content: &str) -> ScrapedItem {
    let mut item = ScrapedItem::new(url, "page");
    item.title = title.to_string();
    item.content = content.to_string();
    item
}

/// Body text long enough to pass the content gate
#[allow(dead_code)]
pub fn long_text() -> String {
    "Lou Gehrig played 2,130 consecutive games for the New York Yankees. ".repeat(3)
}
