//! Markup-derived layout.
//!
//! Without a rendering engine the best available geometry comes from the
//! markup itself. Rules:
//!
//! - `display:none` comes from the inline style, the `hidden` attribute, or a
//!   tag that never renders; it collapses the whole subtree to a zero box.
//! - `visibility` inherits from the nearest ancestor that declares it.
//! - Sizes come from inline `width`/`height` in pixels, then from the
//!   `width`/`height` attributes. Replaced elements without a size get a zero
//!   box; other elements get a full-width line box when they have content.
//! - `top` is the element ordinal times [`LINE_HEIGHT`], which keeps reading
//!   order without pretending to know real offsets.

use std::collections::HashMap;

use dom_query::{Document, NodeId, NodeRef};

use super::{ComputedStyle, DocumentAccessor, Rect};
use crate::dom;
use crate::patterns::{CSS_PIXELS, CSS_URL};

/// Vertical step between consecutive elements.
pub const LINE_HEIGHT: f64 = 24.0;

/// Width given to block content without an explicit size.
pub const NOMINAL_WIDTH: f64 = 1024.0;

const NEVER_RENDERED: &[&str] = &[
    "head", "script", "style", "template", "title", "meta", "link", "noscript", "base",
];

const REPLACED: &[&str] = &["img", "video", "canvas", "iframe", "svg", "embed", "object", "audio"];

/// Style state an element takes from its ancestors.
#[derive(Debug, Clone, Default)]
struct Inherited {
    display_none: bool,
    visibility: Option<String>,
}

/// Geometry inferred from markup alone.
#[derive(Debug, Clone)]
pub struct StaticLayout {
    ordinals: HashMap<NodeId, usize>,
    inherited: HashMap<NodeId, Inherited>,
}

impl StaticLayout {
    /// Index the document's elements.
    ///
    /// Inherited `display:none` and `visibility` are resolved here in one
    /// document-order pass, so later queries never walk the ancestor chain.
    #[must_use]
    pub fn new(doc: &Document) -> Self {
        let elements = dom::all_elements(doc);
        let mut inherited: HashMap<NodeId, Inherited> = HashMap::with_capacity(elements.len());

        for node in &elements {
            let parent = node
                .parent()
                .and_then(|p| inherited.get(&p.id))
                .cloned()
                .unwrap_or_default();
            let state = Inherited {
                display_none: parent.display_none || is_display_none(node),
                visibility: declared_visibility(node).or(parent.visibility),
            };
            inherited.insert(node.id, state);
        }

        let ordinals = elements.iter().enumerate().map(|(idx, node)| (node.id, idx)).collect();
        Self { ordinals, inherited }
    }

    fn ordinal(&self, node: &NodeRef) -> usize {
        self.ordinals.get(&node.id).copied().unwrap_or(0)
    }

    /// Cached inherited state, or a fresh ancestor walk for a node this
    /// layout was not built from.
    fn inherited(&self, node: &NodeRef) -> Inherited {
        if let Some(state) = self.inherited.get(&node.id) {
            return state.clone();
        }
        let chain = dom::self_and_ancestors(node);
        Inherited {
            display_none: chain.iter().any(is_display_none),
            visibility: chain.iter().find_map(declared_visibility),
        }
    }
}

impl DocumentAccessor for StaticLayout {
    fn computed_style(&self, node: &NodeRef) -> ComputedStyle {
        let declarations = inline_declarations(node);
        let mut style = ComputedStyle::default();

        let inherited = self.inherited(node);

        if is_display_none(node) {
            style.display = "none".to_string();
        } else if let Some(display) = lookup(&declarations, "display") {
            style.display = display.to_string();
        }

        style.visibility = inherited.visibility.unwrap_or_else(|| "visible".to_string());

        if let Some(opacity) = lookup(&declarations, "opacity") {
            style.opacity = opacity.to_string();
        }

        let background = lookup(&declarations, "background-image")
            .or_else(|| lookup(&declarations, "background").filter(|v| CSS_URL.is_match(v)));
        if let Some(bg) = background {
            style.background_image = bg.to_string();
        }

        style
    }

    fn bounding_rect(&self, node: &NodeRef) -> Rect {
        if self.inherited(node).display_none {
            return Rect::default();
        }

        let top = self.ordinal(node) as f64 * LINE_HEIGHT;
        let tag = dom::tag_name(node).unwrap_or_default();
        let (width, height) = declared_size(node);

        if REPLACED.contains(&tag.as_str()) {
            return Rect::new(top, 0.0, width.unwrap_or(0.0), height.unwrap_or(0.0));
        }

        if dom::is_tag(node, "picture") && (width.is_none() || height.is_none()) {
            if let Some(img) = dom::first_descendant(node, "img") {
                let inner = self.bounding_rect(&img);
                return Rect::new(top, 0.0, width.unwrap_or(inner.width), height.unwrap_or(inner.height));
            }
        }

        let height = height.unwrap_or(if has_content(node) { LINE_HEIGHT } else { 0.0 });
        Rect::new(top, 0.0, width.unwrap_or(NOMINAL_WIDTH), height)
    }

    fn intrinsic_size(&self, _node: &NodeRef) -> Option<(f64, f64)> {
        None
    }

    fn media_duration(&self, _node: &NodeRef) -> Option<f64> {
        None
    }
}

/// Parse the inline `style` attribute into lowercase `(property, value)` pairs.
fn inline_declarations(node: &NodeRef) -> Vec<(String, String)> {
    let Some(style) = node.attr("style") else {
        return Vec::new();
    };
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let value = value.trim();
            let value = value
                .strip_suffix("!important")
                .map_or(value, str::trim_end);
            Some((prop.trim().to_ascii_lowercase(), value.to_string()))
        })
        .collect()
}

/// Last declaration of `prop` wins, as in CSS.
fn lookup<'d>(declarations: &'d [(String, String)], prop: &str) -> Option<&'d str> {
    declarations
        .iter()
        .rev()
        .find(|(p, _)| p == prop)
        .map(|(_, v)| v.as_str())
}

fn is_display_none(node: &NodeRef) -> bool {
    if node.has_attr("hidden") {
        return true;
    }
    if dom::tag_name(node).is_some_and(|t| NEVER_RENDERED.contains(&t.as_str())) {
        return true;
    }
    lookup(&inline_declarations(node), "display").is_some_and(|d| d.eq_ignore_ascii_case("none"))
}

fn declared_visibility(node: &NodeRef) -> Option<String> {
    lookup(&inline_declarations(node), "visibility").map(ToString::to_string)
}

fn parse_pixels(value: &str) -> Option<f64> {
    CSS_PIXELS
        .captures(value)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Explicit width/height: inline style first, then presentational attributes.
fn declared_size(node: &NodeRef) -> (Option<f64>, Option<f64>) {
    let declarations = inline_declarations(node);
    let dimension = |prop: &str| {
        lookup(&declarations, prop)
            .and_then(parse_pixels)
            .or_else(|| node.attr(prop).and_then(|v| parse_pixels(&v)))
    };
    (dimension("width"), dimension("height"))
}

fn has_content(node: &NodeRef) -> bool {
    node.children()
        .iter()
        .any(|child| child.is_element() || (child.is_text() && !child.text().trim().is_empty()))
}
