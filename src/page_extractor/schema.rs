use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_PAGE_TYPE;

fn default_page_type() -> String {
    DEFAULT_PAGE_TYPE.to_string()
}

fn default_title() -> String {
    "Untitled".to_string()
}

/// An image found on a scraped page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Absolute URL, resolved against the page URL
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: String,
}

/// Everything extracted from one legacy page.
///
/// Field order is the on-disk order of the JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedItem {
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default = "default_page_type")]
    pub page_type: String,
    /// Missing titles read back as "Untitled"; a scraped page without
    /// `<title>` is written with an empty string.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Internal links only, resolved to absolute URLs
    #[serde(default)]
    pub links: Vec<String>,
}

impl ScrapedItem {
    /// Start a record for `url`; every other field begins empty.
    #[must_use]
    pub fn new(url: impl Into<String>, page_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            page_type: page_type.into(),
            title: String::new(),
            content: String::new(),
            images: Vec::new(),
            links: Vec::new(),
        }
    }
}

/// Ordered result of one scrape pass, persisted as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrapedCollection {
    items: Vec<ScrapedItem>,
}

impl ScrapedCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ScrapedItem) {
        self.items.push(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScrapedItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn items(&self) -> &[ScrapedItem] {
        &self.items
    }
}

impl From<Vec<ScrapedItem>> for ScrapedCollection {
    fn from(items: Vec<ScrapedItem>) -> Self {
        Self { items }
    }
}

impl IntoIterator for ScrapedCollection {
    type Item = ScrapedItem;
    type IntoIter = std::vec::IntoIter<ScrapedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScrapedCollection {
    type Item = &'a ScrapedItem;
    type IntoIter = std::slice::Iter<'a, ScrapedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_type_field_in_order() {
        let item = ScrapedItem::new("https://site.com/about", "page");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"url":"https://site.com/about","type":"page","title":"","content":"","images":[],"links":[]}"#
        );
    }

    #[test]
    fn lenient_read_fills_defaults() {
        let item: ScrapedItem = serde_json::from_str(r#"{"url":"https://site.com/x"}"#).unwrap();
        assert_eq!(item.title, "Untitled");
        assert_eq!(item.page_type, "page");
        assert!(item.content.is_empty());
        assert!(item.images.is_empty());
    }

    #[test]
    fn collection_is_a_plain_array() {
        let collection = ScrapedCollection::from(vec![ScrapedItem::new("https://a", "page")]);
        let json = serde_json::to_value(&collection).unwrap();
        assert!(json.is_array());
        let back: ScrapedCollection = serde_json::from_value(json).unwrap();
        assert_eq!(back, collection);
    }
}
