//! Text filter rules.

use dom_query::NodeRef;

use crate::geometry::{clean_text_content, is_element_visible, is_excluded_tag, matches_excluded_selector};
use crate::layout::DocumentAccessor;
use crate::patterns::{DIGITS_ONLY, SYMBOLS_ONLY};
use crate::selector::SelectorSet;

/// Tags whose content is never page text.
pub const DEFAULT_EXCLUDE_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "svg", "path", "meta", "link", "head",
];

/// Navigation, ads and other page chrome.
pub const DEFAULT_EXCLUDE_SELECTORS: &[&str] = &[
    "nav",
    "header",
    "footer",
    "[role=\"navigation\"]",
    "[role=\"banner\"]",
    "[role=\"contentinfo\"]",
    ".advertisement",
    ".ad",
    ".ads",
    ".sidebar",
    ".menu",
    ".navigation",
    "#cookie-notice",
    "#cookie-banner",
];

pub const DEFAULT_MIN_TEXT_LENGTH: usize = 10;

/// Active configuration for text extraction.
#[derive(Debug)]
pub struct TextRules {
    pub min_text_length: usize,
    pub exclude_tags: Vec<String>,
    pub exclude_selectors: SelectorSet,
}

impl TextRules {
    /// Defaults, with `selectors` replacing the default selector list when given.
    #[must_use]
    pub fn with_selectors(selectors: Option<&[String]>) -> Self {
        Self {
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            exclude_tags: DEFAULT_EXCLUDE_TAGS.iter().map(ToString::to_string).collect(),
            exclude_selectors: selectors.map_or_else(
                || SelectorSet::compile(DEFAULT_EXCLUDE_SELECTORS),
                SelectorSet::compile,
            ),
        }
    }
}

impl Default for TextRules {
    fn default() -> Self {
        Self::with_selectors(None)
    }
}

/// Structural eligibility of a text element.
#[must_use]
pub fn should_extract_text(accessor: &dyn DocumentAccessor, node: &NodeRef, rules: &TextRules) -> bool {
    is_element_visible(accessor, node)
        && !is_excluded_tag(node, rules.exclude_tags.as_slice())
        && !matches_excluded_selector(node, &rules.exclude_selectors)
}

/// Whether `text` is meaningful content.
///
/// Rejects normalized text shorter than `min_length` characters, digit-only
/// strings (page numbers, counters) and runs of symbols with no word,
/// Hangul or whitespace character.
///
/// # Example
///
/// ```rust
/// use content_sieve::filter::is_valid_text;
///
/// assert!(is_valid_text("Free shipping on all orders", 10));
/// assert!(!is_valid_text("42", 1));
/// assert!(!is_valid_text("***--***", 1));
/// ```
#[must_use]
pub fn is_valid_text(text: &str, min_length: usize) -> bool {
    let cleaned = clean_text_content(text);
    if cleaned.chars().count() < min_length || cleaned.is_empty() {
        return false;
    }
    !DIGITS_ONLY.is_match(&cleaned) && !SYMBOLS_ONLY.is_match(&cleaned)
}
