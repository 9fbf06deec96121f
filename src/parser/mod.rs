//! Parsers
//!
//! One driver per media kind. Each walks the page for its candidates, applies
//! the matching filter rules, deduplicates and returns items sorted by
//! document position.
//!
//! All mutable state of a pass lives in [`ExtractionContext`], created fresh
//! for every extraction call and dropped when it returns.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

use crate::geometry::element_position;
use crate::page::Page;

pub mod image;
pub mod text;
pub mod video;

pub use image::extract_images;
pub use text::extract_texts;
pub use video::extract_videos;

/// Per-call extraction state.
///
/// - **processed** nodes already emitted by the text parser
/// - **seen URLs** absolute image URLs already emitted, first discovery wins
#[derive(Debug)]
pub struct ExtractionContext<'p> {
    page: &'p Page,
    processed: HashSet<NodeId>,
    seen_urls: HashSet<String>,
}

impl<'p> ExtractionContext<'p> {
    #[must_use]
    pub fn new(page: &'p Page) -> Self {
        Self {
            page,
            processed: HashSet::new(),
            seen_urls: HashSet::new(),
        }
    }

    #[must_use]
    pub fn page(&self) -> &'p Page {
        self.page
    }

    pub fn mark_done(&mut self, node_id: NodeId) {
        self.processed.insert(node_id);
    }

    #[must_use]
    pub fn is_done(&self, node_id: NodeId) -> bool {
        self.processed.contains(&node_id)
    }

    /// Record `url` as emitted. Returns `false` when it was already seen.
    pub fn claim_url(&mut self, url: &str) -> bool {
        if self.seen_urls.contains(url) {
            return false;
        }
        self.seen_urls.insert(url.to_string());
        true
    }

    #[must_use]
    pub fn is_seen(&self, url: &str) -> bool {
        self.seen_urls.contains(url)
    }

    /// Document position of `node` on this page.
    #[must_use]
    pub fn position(&self, node: &NodeRef) -> f64 {
        element_position(self.page.accessor(), node)
    }
}

/// Stable ascending sort by position; ties keep discovery order.
pub(crate) fn sort_by_position<T>(items: &mut [T], position: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| position(a).total_cmp(&position(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_url_first_wins() {
        let page = Page::from_html("<p>x</p>", "https://x.com/");
        let mut ctx = ExtractionContext::new(&page);

        assert!(ctx.claim_url("https://x.com/a.jpg"));
        assert!(!ctx.claim_url("https://x.com/a.jpg"));
        assert!(ctx.is_seen("https://x.com/a.jpg"));
        assert!(!ctx.is_seen("https://x.com/b.jpg"));
    }

    #[test]
    fn test_processed_nodes_are_per_context() {
        let page = Page::from_html(r#"<p id="p">x</p>"#, "https://x.com/");
        let node_id = page.document().select("#p").nodes()[0].id;

        let mut first = ExtractionContext::new(&page);
        first.mark_done(node_id);
        assert!(first.is_done(node_id));

        let second = ExtractionContext::new(&page);
        assert!(!second.is_done(node_id));
    }

    #[test]
    fn test_sort_by_position_is_stable() {
        let mut items = vec![(2.0, 'a'), (1.0, 'b'), (2.0, 'c'), (0.0, 'd')];
        sort_by_position(&mut items, |item| item.0);

        let order: String = items.iter().map(|item| item.1).collect();
        assert_eq!(order, "dbac");
    }
}
