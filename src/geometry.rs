//! Geometry and Visibility Helpers
//!
//! Pure functions over a single element. They read computed style and layout
//! through a [`DocumentAccessor`] and never touch the document itself.

use dom_query::NodeRef;

use crate::dom;
use crate::layout::DocumentAccessor;
use crate::patterns::WHITESPACE_NORMALIZE;
use crate::selector::SelectorSet;

pub use crate::url_utils::to_absolute_url;

/// Whether the element is actually rendered.
///
/// False when computed `display` is `none`, `visibility` is `hidden`,
/// opacity is zero, or the bounding box has zero width or height.
#[must_use]
pub fn is_element_visible(accessor: &dyn DocumentAccessor, node: &NodeRef) -> bool {
    if !node.is_element() {
        return false;
    }

    let style = accessor.computed_style(node);
    if style.display.eq_ignore_ascii_case("none")
        || style.visibility.eq_ignore_ascii_case("hidden")
        || style.opacity_value() == 0.0
    {
        return false;
    }

    !accessor.bounding_rect(node).is_empty()
}

/// Absolute vertical offset of the element in the document.
///
/// Bounding-box top plus the current scroll offset, so the value does not
/// depend on where the page happens to be scrolled.
#[must_use]
pub fn element_position(accessor: &dyn DocumentAccessor, node: &NodeRef) -> f64 {
    accessor.bounding_rect(node).top + accessor.scroll_y()
}

/// Whether the element or one of its ancestors matches an exclusion selector.
#[inline]
#[must_use]
pub fn matches_excluded_selector(node: &NodeRef, selectors: &SelectorSet) -> bool {
    selectors.matches(node)
}

/// Case-insensitive membership of the element's tag in `tags`.
#[must_use]
pub fn is_excluded_tag<S: AsRef<str>>(node: &NodeRef, tags: &[S]) -> bool {
    dom::tag_name(node).is_some_and(|tag| tags.iter().any(|t| t.as_ref().eq_ignore_ascii_case(&tag)))
}

/// Collapse every whitespace run to one space and trim both ends.
///
/// # Example
///
/// ```rust
/// use content_sieve::geometry::clean_text_content;
///
/// assert_eq!(clean_text_content("  Hello \n\t world  "), "Hello world");
/// ```
#[must_use]
pub fn clean_text_content(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}
