//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate that mirror the browser DOM calls the
//! extraction rules are written against (`tagName`, `getAttribute`,
//! `childNodes`, `closest`). Everything here is read-only.

use std::collections::HashMap;

pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Clone document
///
/// DOM equivalent: `document.cloneNode(true)`
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

// === Tag/Attribute Information ===

/// Lowercase tag name of an element node.
///
/// DOM equivalent: `element.tagName.toLowerCase()`
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Attribute value, trimmed, with empty values treated as missing.
///
/// DOM equivalent: `element.getAttribute(name)` followed by a truthiness check
#[must_use]
pub fn non_empty_attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Whether the element has the given tag name (case-insensitive).
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.node_name()
        .is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

// === Tree Navigation ===

/// The element and all of its element ancestors, nearest first.
///
/// DOM equivalent: the chain walked by `element.closest(...)`
#[must_use]
pub fn self_and_ancestors<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut chain = vec![*node];
    let mut current = node.parent();
    while let Some(parent) = current {
        if !parent.is_element() {
            break;
        }
        chain.push(parent);
        current = parent.parent();
    }
    chain
}

/// First descendant element with the given tag, in document order.
///
/// DOM equivalent: `element.querySelector(tag)`
#[must_use]
pub fn first_descendant<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    Selection::from(*node).select(tag).nodes().first().copied()
}

/// All descendant elements with the given tag, in document order.
///
/// DOM equivalent: `element.querySelectorAll(tag)`
#[must_use]
pub fn descendants<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select(tag).nodes().to_vec()
}

/// All elements of the document in document order.
///
/// DOM equivalent: `document.querySelectorAll('*')`
#[must_use]
pub fn all_elements(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.select("*").nodes().to_vec()
}

/// Map each element to its index in a pre-order walk of the document.
///
/// Layout snapshots recorded outside this process address elements by this
/// ordinal, so it must stay identical to `document.querySelectorAll('*')`
/// order in a browser.
#[must_use]
pub fn element_ordinals(doc: &Document) -> HashMap<NodeId, usize> {
    all_elements(doc)
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.id, idx))
        .collect()
}

// === Text Content ===

/// Concatenated values of the element's direct text-node children, trimmed.
///
/// Text inside descendant elements is excluded so that a container and its
/// child never contribute the same words twice.
#[must_use]
pub fn direct_text(node: &NodeRef) -> String {
    let mut text = String::new();
    for child in node.children() {
        if child.is_text() {
            text.push_str(&child.text());
        }
    }
    text.trim().to_string()
}

/// Rendered text of an element subtree, skipping never-rendered containers.
///
/// DOM equivalent: `element.innerText` (without layout-aware line breaks)
#[must_use]
pub fn rendered_text(node: &NodeRef) -> String {
    let mut out = String::new();
    let mut stack: Vec<NodeRef> = node.children().into_iter().rev().collect();

    while let Some(current) = stack.pop() {
        if current.is_text() {
            out.push_str(&current.text());
            out.push(' ');
        } else if current.is_element() && !is_unrendered_container(&current) {
            stack.extend(current.children().into_iter().rev());
        }
    }
    out
}

fn is_unrendered_container(node: &NodeRef) -> bool {
    node.node_name().is_some_and(|t| {
        matches!(
            t.to_ascii_lowercase().as_str(),
            "script" | "style" | "noscript" | "template"
        )
    })
}

/// Inner HTML of the first `<body>` element, or empty when there is none.
///
/// DOM equivalent: `document.body.innerHTML`
#[must_use]
pub fn body_inner_html(doc: &Document) -> StrTendril {
    doc.select("body").inner_html()
}
