//! Tests for the type-safe configuration builder and defaults

use lgfc_migration::config::{ProcessConfig, ScrapeConfig};
use lgfc_migration::utils::{
    CANDIDATE_PATHS, FETCH_TIMEOUT, MIGRATION_USER_AGENT, POLITENESS_DELAY, PROBE_TIMEOUT,
};
use std::path::Path;
use std::time::Duration;

#[test]
fn test_builder_requires_output_dir_and_base_url() {
    // These should not compile if uncommented - build() needs both states
    // let config = ScrapeConfig::builder().build();
    // let config = ScrapeConfig::builder().output_dir("/tmp").build();

    let config = ScrapeConfig::builder()
        .output_dir("/tmp/scraped")
        .base_url("https://www.LouGehrigFanClub.com")
        .build()
        .unwrap();

    assert_eq!(config.output_dir(), Path::new("/tmp/scraped"));
    assert_eq!(config.base_url(), "https://www.LouGehrigFanClub.com");
}

#[test]
fn test_builder_defaults_match_constants() {
    let config = ScrapeConfig::builder()
        .output_dir("out")
        .base_url("https://example.com")
        .build()
        .unwrap();

    assert_eq!(config.user_agent(), MIGRATION_USER_AGENT);
    assert_eq!(config.probe_timeout(), PROBE_TIMEOUT);
    assert_eq!(config.fetch_timeout(), FETCH_TIMEOUT);
    assert_eq!(config.politeness_delay(), POLITENESS_DELAY);
    assert_eq!(config.page_type(), "page");
    assert_eq!(config.candidate_paths().len(), CANDIDATE_PATHS.len());
}

#[test]
fn test_base_url_is_normalized() {
    let config = ScrapeConfig::builder()
        .output_dir("out")
        .base_url("example.com/")
        .build()
        .unwrap();

    assert_eq!(config.base_url(), "https://example.com");
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let result = ScrapeConfig::builder()
        .output_dir("out")
        .base_url("https://exa mple.com")
        .build();

    assert!(result.is_err());
}

#[test]
fn test_candidate_urls_cover_the_fixed_list() {
    let config = ScrapeConfig::builder()
        .output_dir("out")
        .base_url("https://example.com")
        .build()
        .unwrap();

    let urls = config.candidate_urls();
    assert_eq!(urls.len(), 12);
    assert_eq!(urls[0], "https://example.com");
    assert!(urls.contains(&"https://example.com/biography".to_string()));
    assert!(urls.contains(&"https://example.com/awareness".to_string()));
}

#[test]
fn test_optional_setters_apply_in_any_state() {
    let config = ScrapeConfig::builder()
        .politeness_delay(Duration::ZERO)
        .output_dir("out")
        .user_agent("TestAgent/1.0")
        .base_url("https://example.com")
        .candidate_paths(["", "blog"])
        .probe_timeout(Duration::from_millis(250))
        .build()
        .unwrap();

    assert!(config.politeness_delay().is_zero());
    assert_eq!(config.user_agent(), "TestAgent/1.0");
    assert_eq!(
        config.candidate_urls(),
        vec!["https://example.com", "https://example.com/blog"]
    );
    assert_eq!(config.probe_timeout(), Duration::from_millis(250));
}

#[test]
fn test_process_config_defaults() {
    let config = ProcessConfig::default();

    assert_eq!(config.input_file, Path::new("scraped_content/scraped_data.json"));
    assert_eq!(config.posts_dir, Path::new("../content/posts"));
    assert_eq!(config.pages_dir, Path::new("../content/pages"));
    assert_eq!(config.min_content_chars, 100);
    assert_eq!(config.tags, vec!["legacy", "lou-gehrig"]);
}
