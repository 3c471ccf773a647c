//! Conversion of scraped pages into CMS markdown.
//!
//! Cleans each item's text, classifies it as a post or a page from its URL,
//! and writes a dated markdown file with frontmatter.

pub mod classify;
pub mod post;
pub mod runner;
pub mod text;

pub use classify::{Section, classify};
pub use post::{MarkdownPost, build_post};
pub use runner::{ProcessReport, is_migratable, load_collection, process_all_content};
pub use text::{clean_text, slugify};
