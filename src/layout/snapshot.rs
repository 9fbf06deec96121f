//! Recorded layout.
//!
//! A browser-side script walks `document.querySelectorAll('*')`, records each
//! element's bounding box, computed style and media facts, and ships the
//! result as JSON alongside `document.documentElement.outerHTML`. Elements are
//! keyed by their index in that walk, which [`crate::dom::element_ordinals`]
//! reproduces on the parsed copy.
//!
//! ```json
//! {
//!   "scrollY": 120,
//!   "elements": {
//!     "14": { "rect": { "top": 80, "left": 0, "width": 640, "height": 480 },
//!             "naturalWidth": 1280, "naturalHeight": 960 }
//!   }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use dom_query::{Document, NodeId, NodeRef};
use serde::{Deserialize, Serialize};

use super::{ComputedStyle, DocumentAccessor, Rect};
use crate::dom;
use crate::error::Result;

/// Recorded facts about one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementGeometry {
    pub rect: Rect,
    pub style: ComputedStyle,
    pub natural_width: Option<f64>,
    pub natural_height: Option<f64>,
    pub duration: Option<f64>,
}

impl ElementGeometry {
    /// A rendered, visible box at `top` with the given size.
    #[must_use]
    pub fn boxed(top: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(top, 0.0, width, height),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ComputedStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background_image: &str) -> Self {
        self.style.background_image = background_image.to_string();
        self
    }

    #[must_use]
    pub fn with_natural_size(mut self, width: f64, height: f64) -> Self {
        self.natural_width = Some(width);
        self.natural_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }
}

/// Serialized layout of a whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub scroll_y: f64,
    pub elements: BTreeMap<usize, ElementGeometry>,
}

impl LayoutSnapshot {
    /// Parse a snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Record geometry for the element at `ordinal`.
    pub fn insert(&mut self, ordinal: usize, geometry: ElementGeometry) {
        self.elements.insert(ordinal, geometry);
    }

    /// Record the same geometry for every element matching `selector`.
    ///
    /// Returns the number of elements recorded. An invalid selector records
    /// nothing.
    pub fn set(&mut self, doc: &Document, selector: &str, geometry: &ElementGeometry) -> usize {
        let ordinals = dom::element_ordinals(doc);
        let Some(matched) = doc.try_select(selector) else {
            return 0;
        };
        let mut count = 0;
        for node in matched.nodes() {
            if let Some(&ordinal) = ordinals.get(&node.id) {
                self.elements.insert(ordinal, geometry.clone());
                count += 1;
            }
        }
        count
    }
}

/// Accessor backed by a [`LayoutSnapshot`].
///
/// Elements the snapshot does not mention report a zero box, i.e. they were
/// not rendered when the snapshot was taken.
#[derive(Debug, Clone)]
pub struct SnapshotLayout {
    scroll_y: f64,
    geometry: HashMap<NodeId, ElementGeometry>,
}

impl SnapshotLayout {
    /// Bind a snapshot to the parsed document it was recorded from.
    #[must_use]
    pub fn new(doc: &Document, snapshot: LayoutSnapshot) -> Self {
        let by_ordinal = snapshot.elements;
        let geometry = dom::element_ordinals(doc)
            .into_iter()
            .filter_map(|(id, ordinal)| by_ordinal.get(&ordinal).map(|g| (id, g.clone())))
            .collect();
        Self {
            scroll_y: snapshot.scroll_y,
            geometry,
        }
    }

    fn get(&self, node: &NodeRef) -> Option<&ElementGeometry> {
        self.geometry.get(&node.id)
    }
}

impl DocumentAccessor for SnapshotLayout {
    fn computed_style(&self, node: &NodeRef) -> ComputedStyle {
        self.get(node).map(|g| g.style.clone()).unwrap_or_default()
    }

    fn bounding_rect(&self, node: &NodeRef) -> Rect {
        self.get(node).map(|g| g.rect).unwrap_or_default()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn intrinsic_size(&self, node: &NodeRef) -> Option<(f64, f64)> {
        let g = self.get(node)?;
        match (g.natural_width, g.natural_height) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Some((w, h)),
            _ => None,
        }
    }

    fn media_duration(&self, node: &NodeRef) -> Option<f64> {
        self.get(node)
            .and_then(|g| g.duration)
            .filter(|d| d.is_finite() && *d >= 0.0)
    }
}
