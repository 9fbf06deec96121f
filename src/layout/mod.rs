//! Document Accessor
//!
//! The filters need a handful of read-only facts that only a rendering engine
//! knows: computed style, the element's bounding box, the scroll offset and,
//! for media, intrinsic size and duration. `DocumentAccessor` is that narrow
//! capability. Two implementations ship with the crate:
//!
//! - [`StaticLayout`]: derives everything from markup (inline styles, size
//!   attributes, document order). Used when only HTML is available.
//! - [`SnapshotLayout`]: replays geometry recorded by a real browser, keyed by
//!   element ordinal. Also the fixture type for tests.

mod snapshot;
mod static_layout;

use dom_query::NodeRef;
use serde::{Deserialize, Serialize};

pub use snapshot::{ElementGeometry, LayoutSnapshot, SnapshotLayout};
pub use static_layout::StaticLayout;

/// Subset of `getComputedStyle()` the filters read.
///
/// Values are kept as CSS strings, the way a browser reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
    pub opacity: String,
    pub background_image: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: "block".to_string(),
            visibility: "visible".to_string(),
            opacity: "1".to_string(),
            background_image: "none".to_string(),
        }
    }
}

impl ComputedStyle {
    /// Opacity as a number; unparsable values count as fully opaque.
    #[must_use]
    pub fn opacity_value(&self) -> f64 {
        self.opacity.trim().parse::<f64>().unwrap_or(1.0)
    }
}

/// Viewport-relative box, as returned by `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    /// A box with no area. Unrendered elements report this.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Read-only view of the rendered state of a document.
///
/// Implementations must be side-effect free: the extraction pass may query
/// the same element many times and in any order.
pub trait DocumentAccessor {
    /// Computed style of an element.
    fn computed_style(&self, node: &NodeRef) -> ComputedStyle;

    /// Rendered box of an element relative to the viewport.
    fn bounding_rect(&self, node: &NodeRef) -> Rect;

    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64 {
        0.0
    }

    /// Intrinsic media size (`naturalWidth`/`videoWidth`), when known.
    fn intrinsic_size(&self, node: &NodeRef) -> Option<(f64, f64)>;

    /// Media duration in seconds, when known and finite.
    fn media_duration(&self, node: &NodeRef) -> Option<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_rendered() {
        let style = ComputedStyle::default();

        assert_eq!(style.display, "block");
        assert_eq!(style.visibility, "visible");
        assert_eq!(style.opacity_value(), 1.0);
        assert_eq!(style.background_image, "none");
    }

    #[test]
    fn test_opacity_value_parses_decimal_zero() {
        let style = ComputedStyle {
            opacity: "0.0".to_string(),
            ..ComputedStyle::default()
        };
        assert_eq!(style.opacity_value(), 0.0);
    }

    #[test]
    fn test_rect_is_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(0.0, 0.0, 100.0, 0.0).is_empty());
        assert!(!Rect::new(10.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_style_deserializes_camel_case() {
        let style: ComputedStyle =
            serde_json::from_str(r#"{"display":"none","backgroundImage":"url(a.png)"}"#).expect("valid json");

        assert_eq!(style.display, "none");
        assert_eq!(style.background_image, "url(a.png)");
        assert_eq!(style.visibility, "visible");
    }
}
