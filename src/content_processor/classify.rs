//! Post/page classification by source URL.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::page_extractor::schema::ScrapedItem;

/// URL fragments that mark an item as a dated post
const POST_URL_MARKERS: &[&str] = &["blog", "news"];

/// CMS collection a migrated item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Posts,
    Pages,
}

impl Section {
    /// Case-sensitive substring test on the URL
    #[must_use]
    pub fn for_url(url: &str) -> Self {
        if POST_URL_MARKERS.iter().any(|marker| url.contains(marker)) {
            Self::Posts
        } else {
            Self::Pages
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Pages => "pages",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section for a scraped item
#[must_use]
pub fn classify(item: &ScrapedItem) -> Section {
    Section::for_url(&item.url)
}
