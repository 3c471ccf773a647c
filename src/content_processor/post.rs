//! Markdown documents with CMS frontmatter.

use chrono::{DateTime, Local, SecondsFormat};

use super::text::{clean_text, slugify};
use crate::page_extractor::schema::ScrapedItem;

/// Slug used when a title has no usable characters
const FALLBACK_SLUG: &str = "untitled";

/// One migrated document, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownPost {
    pub title: String,
    pub slug: String,
    /// Transform time, not fetch time
    pub date: DateTime<Local>,
    pub tags: Vec<String>,
    pub migrated_from: String,
    /// Cleaned body text
    pub body: String,
}

impl MarkdownPost {
    /// Build the document for `item`, cleaning its body.
    #[must_use]
    pub fn from_item(item: &ScrapedItem, tags: &[String], now: DateTime<Local>) -> Self {
        let slug = slugify(&item.title);
        Self {
            title: item.title.clone(),
            slug: if slug.is_empty() {
                FALLBACK_SLUG.to_string()
            } else {
                slug
            },
            date: now,
            tags: tags.to_vec(),
            migrated_from: item.url.clone(),
            body: clean_text(&item.content),
        }
    }

    /// `YYYY-MM-DD-<slug>.md`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.date.format("%Y-%m-%d"), self.slug)
    }

    /// Frontmatter block, a blank line, then the body.
    #[must_use]
    pub fn render(&self) -> String {
        let tags = self
            .tags
            .iter()
            .map(|tag| quoted(tag))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "---\ntitle: {}\ndate: {}\ntags: [{}]\nmigrated_from: {}\n---\n\n{}\n",
            quoted(&self.title),
            self.date.to_rfc3339_opts(SecondsFormat::Secs, false),
            tags,
            quoted(&self.migrated_from),
            self.body
        )
    }
}

/// Double-quoted YAML scalar
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// File name and rendered content for `item`.
#[must_use]
pub fn build_post(item: &ScrapedItem, tags: &[String], now: DateTime<Local>) -> (String, String) {
    let post = MarkdownPost::from_item(item, tags, now);
    (post.file_name(), post.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 16, 9, 30, 0)
            .earliest()
            .unwrap()
    }

    fn tags() -> Vec<String> {
        vec!["legacy".to_string(), "lou-gehrig".to_string()]
    }

    fn item(url: &str, title: &str, content: &str) -> ScrapedItem {
        let mut item = ScrapedItem::new(url, "page");
        item.title = title.to_string();
        item.content = content.to_string();
        item
    }

    #[test]
    fn file_name_uses_date_and_slug() {
        let (name, _) = build_post(&item("https://site/news/x", "Hello World", "b"), &tags(), fixed_now());
        assert_eq!(name, "2026-10-16-hello-world.md");
    }

    #[test]
    fn trailing_punctuation_leaves_a_hyphen() {
        let (name, _) = build_post(&item("https://site/x", "Hello World !", "b"), &tags(), fixed_now());
        assert_eq!(name, "2026-10-16-hello-world-.md");
    }

    #[test]
    fn empty_slug_falls_back() {
        let (name, _) = build_post(&item("https://site/x", "???", "b"), &tags(), fixed_now());
        assert_eq!(name, "2026-10-16-untitled.md");
    }

    #[test]
    fn renders_frontmatter_then_body() {
        let (_, content) = build_post(
            &item("https://site/news/x", "Hello World", "  Body   text  "),
            &tags(),
            fixed_now(),
        );
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "---");
        assert_eq!(lines[1], "title: \"Hello World\"");
        assert!(lines[2].starts_with("date: 2026-10-16T09:30:00"));
        assert_eq!(lines[3], r#"tags: ["legacy", "lou-gehrig"]"#);
        assert_eq!(lines[4], r#"migrated_from: "https://site/news/x""#);
        assert_eq!(lines[5], "---");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Body text");
        assert!(content.ends_with("Body text\n"));
    }

    #[test]
    fn quotes_in_title_are_escaped() {
        let post = MarkdownPost::from_item(
            &item("https://site/x", r#"The "Iron Horse""#, "b"),
            &tags(),
            fixed_now(),
        );
        assert!(post.render().contains(r#"title: "The \"Iron Horse\"""#));
        assert_eq!(post.slug, "the-iron-horse");
    }
}
