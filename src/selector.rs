//! Exclusion Selector Sets
//!
//! Exclusion selectors are CSS patterns naming elements (or ancestors of
//! elements) that must never be extracted. They are parsed once when options
//! are compiled; a selector that fails to parse is logged and dropped there,
//! so matching an element never has to deal with parse errors.

use std::fmt;

use dom_query::{Matcher, NodeRef};
use tracing::warn;

use crate::dom;

/// A compiled list of exclusion selectors.
///
/// Matching uses closest-match semantics: an element is excluded when it, or
/// any of its ancestors, matches any valid selector in the set.
#[derive(Default)]
pub struct SelectorSet {
    compiled: Vec<(String, Matcher)>,
    rejected: Vec<String>,
}

impl SelectorSet {
    /// Parse each selector, keeping the valid ones.
    ///
    /// Invalid selectors are recorded in [`SelectorSet::rejected`] and never
    /// match anything. They do not affect the remaining selectors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use content_sieve::selector::SelectorSet;
    ///
    /// let set = SelectorSet::compile(&["nav", "div[[", ".ad"]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.rejected(), &["div[[".to_string()]);
    /// ```
    #[must_use]
    pub fn compile<S: AsRef<str>>(selectors: &[S]) -> Self {
        let mut set = Self::default();
        for selector in selectors {
            let source = selector.as_ref().trim();
            if source.is_empty() {
                continue;
            }
            match Matcher::new(source) {
                Ok(matcher) => set.compiled.push((source.to_string(), matcher)),
                Err(err) => {
                    warn!(selector = source, error = ?err, "ignoring invalid exclusion selector");
                    set.rejected.push(source.to_string());
                }
            }
        }
        set
    }

    /// Whether `node` or one of its ancestors matches any selector.
    ///
    /// DOM equivalent: `el.matches(sel) || el.closest(sel) !== null` for each
    /// selector.
    #[must_use]
    pub fn matches(&self, node: &NodeRef) -> bool {
        if self.compiled.is_empty() {
            return false;
        }
        dom::self_and_ancestors(node)
            .iter()
            .any(|candidate| self.compiled.iter().any(|(_, matcher)| candidate.is_match(matcher)))
    }

    /// Selectors that parsed successfully, in their original order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.compiled.iter().map(|(source, _)| source.as_str())
    }

    /// Selectors that failed to parse and are ignored.
    #[must_use]
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Number of usable selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

impl fmt::Debug for SelectorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorSet")
            .field("compiled", &self.sources().collect::<Vec<_>>())
            .field("rejected", &self.rejected)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<'a>(doc: &'a dom::Document, sel: &str) -> NodeRef<'a> {
        doc.select(sel).nodes()[0]
    }

    #[test]
    fn test_matches_element_itself() {
        let doc = dom::parse(r#"<div class="ad" id="x">buy</div>"#);
        let set = SelectorSet::compile(&[".ad"]);

        assert!(set.matches(&node(&doc, "#x")));
    }

    #[test]
    fn test_matches_ancestor() {
        let doc = dom::parse(r#"<nav><ul><li><a id="x" href="/">Home</a></li></ul></nav>"#);
        let set = SelectorSet::compile(&["nav"]);

        assert!(set.matches(&node(&doc, "#x")));
    }

    #[test]
    fn test_descendant_selector_matches_scoped_element() {
        let doc = dom::parse(r#"<header><img id="logo" src="l.png"></header><main><img id="hero" src="h.png"></main>"#);
        let set = SelectorSet::compile(&["header img"]);

        assert!(set.matches(&node(&doc, "#logo")));
        assert!(!set.matches(&node(&doc, "#hero")));
    }

    #[test]
    fn test_invalid_selector_does_not_poison_others() {
        let doc = dom::parse(r#"<div class="sidebar"><p id="x">side</p></div><p id="y">main</p>"#);
        let set = SelectorSet::compile(&["p:::nonsense", ".sidebar", "div[[", ":nth-child("]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.rejected(), &["p:::nonsense", "div[[", ":nth-child("]);
        assert!(set.matches(&node(&doc, "#x")));
        assert!(!set.matches(&node(&doc, "#y")));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let doc = dom::parse(r#"<nav id="x">menu</nav>"#);
        let set = SelectorSet::compile::<&str>(&[]);

        assert!(set.is_empty());
        assert!(!set.matches(&node(&doc, "#x")));
    }

    #[test]
    fn test_blank_selectors_are_skipped() {
        let set = SelectorSet::compile(&["", "  ", "footer"]);

        assert_eq!(set.sources().collect::<Vec<_>>(), vec!["footer"]);
        assert!(set.rejected().is_empty());
    }

    #[test]
    fn test_unclosed_attribute_selector_is_closed_at_end_of_input() {
        let doc = dom::parse(r#"<p id="x" unclosed>flagged</p><p id="y">plain</p>"#);
        let set = SelectorSet::compile(&["[unclosed"]);

        assert_eq!(set.len(), 1);
        assert!(set.rejected().is_empty());
        assert!(set.matches(&node(&doc, "#x")));
        assert!(!set.matches(&node(&doc, "#y")));
    }
}
