//! Configuration module for the migration passes
//!
//! This module provides the `ScrapeConfig` struct with its type-safe builder,
//! and the `ProcessConfig` used by the markdown conversion pass. Defaults come
//! from `utils::constants`.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithBaseUrl, WithOutputDir};
pub use types::{ProcessConfig, ScrapeConfig};
