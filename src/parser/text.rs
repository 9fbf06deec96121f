//! Text parser.

use tracing::debug;

use super::{sort_by_position, ExtractionContext};
use crate::dom;
use crate::filter::text::{is_valid_text, should_extract_text, TextRules};
use crate::geometry::clean_text_content;
use crate::result::ExtractedText;

/// Candidate tags, visited in this order.
pub const TEXT_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "div", "article", "section", "li", "td",
    "th", "blockquote", "pre", "code", "label", "a",
];

/// Collect text fragments from every candidate element.
///
/// Only an element's direct text-node children count, so
/// `<div>text<span>nested</span></div>` yields `"text"` for the `div` and,
/// separately, `"nested"` for the `span`.
pub fn extract_texts(ctx: &mut ExtractionContext<'_>, rules: &TextRules) -> Vec<ExtractedText> {
    let page = ctx.page();
    let accessor = page.accessor();
    let mut texts = Vec::new();

    for tag in TEXT_TAGS {
        for node in page.document().select(tag).nodes() {
            if ctx.is_done(node.id) {
                continue;
            }
            if !should_extract_text(accessor, node, rules) {
                continue;
            }

            let raw = dom::direct_text(node);
            if raw.is_empty() || !is_valid_text(&raw, rules.min_text_length) {
                continue;
            }

            texts.push(ExtractedText {
                content: clean_text_content(&raw),
                tag_name: dom::tag_name(node).unwrap_or_else(|| (*tag).to_string()),
                position: ctx.position(node),
            });
            ctx.mark_done(node.id);
        }
    }

    sort_by_position(&mut texts, |t| t.position);
    debug!(count = texts.len(), "extracted texts");
    texts
}
