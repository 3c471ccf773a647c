//! Content saving utilities for both passes

// Module declarations
mod json_saver;
mod markdown_saver;

// Re-export public API from json_saver module
pub use json_saver::{page_file_name, persist};

// Re-export public API from markdown_saver module
pub use markdown_saver::save_markdown_post;
