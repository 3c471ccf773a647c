//! Main content region selection.
//!
//! Picks the primary content container of a legacy page by walking an ordered
//! fallback chain: `<main>`, then any element with the `content` class, then
//! `<body>`. The document root closes the chain, so a region always exists.
//!
//! Boilerplate (`script`, `style`, `nav`, `footer`) inside the region is pruned.
//! Pruning behaves like removing those subtrees from the document: they are
//! invisible to the region text and to the image and link extraction that runs
//! afterwards over the whole page.

use ego_tree::NodeId;
use ego_tree::iter::Edge;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

// Hardcoded selectors should NEVER fail to parse - if they do, it's a compile-time bug.

static MAIN_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("main").expect("BUG: hardcoded CSS selector 'main' is invalid")
});

static CONTENT_CLASS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".content").expect("BUG: hardcoded CSS selector '.content' is invalid")
});

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("BUG: hardcoded CSS selector 'body' is invalid")
});

static PRUNE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script, style, nav, footer")
        .expect("BUG: hardcoded CSS selector 'script, style, nav, footer' is invalid")
});

/// Candidate containers in priority order
fn region_chain() -> [&'static Selector; 3] {
    [&*MAIN_SELECTOR, &*CONTENT_CLASS_SELECTOR, &*BODY_SELECTOR]
}

/// The chosen content container plus the subtrees pruned from it
pub struct MainRegion<'a> {
    element: ElementRef<'a>,
    pruned: HashSet<NodeId>,
}

/// Select the main content region of `document`.
pub fn select_main_region(document: &Html) -> MainRegion<'_> {
    let element = region_chain()
        .into_iter()
        .find_map(|selector| document.select(selector).next())
        .unwrap_or_else(|| document.root_element());

    let pruned: HashSet<NodeId> = element.select(&PRUNE_SELECTOR).map(|e| e.id()).collect();

    log::trace!(
        target: "lgfc::scrape",
        "Main region <{}> with {} pruned subtrees",
        element.value().name(),
        pruned.len()
    );

    MainRegion { element, pruned }
}

impl<'a> MainRegion<'a> {
    #[must_use]
    pub fn element(&self) -> ElementRef<'a> {
        self.element
    }

    /// Concatenated text of the region, minus pruned subtrees, trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut skipping: Option<NodeId> = None;

        for edge in self.element.traverse() {
            match edge {
                Edge::Open(node) => {
                    if skipping.is_some() {
                        continue;
                    }
                    if self.pruned.contains(&node.id()) {
                        skipping = Some(node.id());
                        continue;
                    }
                    if let Node::Text(text) = node.value() {
                        out.push_str(text);
                    }
                }
                Edge::Close(node) => {
                    if skipping == Some(node.id()) {
                        skipping = None;
                    }
                }
            }
        }

        out.trim().to_string()
    }

    /// Whether `element` sits inside (or is) a pruned subtree
    #[must_use]
    pub fn is_pruned(&self, element: &ElementRef<'_>) -> bool {
        if self.pruned.is_empty() {
            return false;
        }
        std::iter::once(element.id())
            .chain(element.ancestors().map(|ancestor| ancestor.id()))
            .any(|id| self.pruned.contains(&id))
    }
}
