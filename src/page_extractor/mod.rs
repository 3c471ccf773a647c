//! Page data extraction functions.
//!
//! This module turns a fetched HTML page into a `ScrapedItem`: title, main
//! content text, images and internal links.

// Sub-modules
pub mod extractors;
pub mod main_content;
pub mod schema;

// Re-exports for public API
pub use extractors::{extract_images, extract_links, extract_page, extract_title};
pub use main_content::{MainRegion, select_main_region};
pub use schema::{ImageRef, ScrapedCollection, ScrapedItem};
