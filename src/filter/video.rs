//! Video filter rules.

use dom_query::NodeRef;

use crate::geometry::{is_element_visible, matches_excluded_selector};
use crate::layout::DocumentAccessor;
use crate::options::Dimensions;
use crate::selector::SelectorSet;

pub const DEFAULT_EXCLUDE_SELECTORS: &[&str] = &[
    "nav video",
    "header video",
    "footer video",
    ".advertisement video",
];

pub const DEFAULT_MIN_SIZE: Dimensions = Dimensions::new(200.0, 150.0);

/// Active configuration for video extraction.
#[derive(Debug)]
pub struct VideoRules {
    pub min_size: Dimensions,
    pub exclude_selectors: SelectorSet,
}

impl VideoRules {
    /// Defaults, with `selectors` replacing the default selector list when given.
    #[must_use]
    pub fn with_selectors(selectors: Option<&[String]>) -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            exclude_selectors: selectors.map_or_else(
                || SelectorSet::compile(DEFAULT_EXCLUDE_SELECTORS),
                SelectorSet::compile,
            ),
        }
    }
}

impl Default for VideoRules {
    fn default() -> Self {
        Self::with_selectors(None)
    }
}

#[must_use]
pub fn should_extract_video(accessor: &dyn DocumentAccessor, node: &NodeRef, rules: &VideoRules) -> bool {
    is_element_visible(accessor, node) && !matches_excluded_selector(node, &rules.exclude_selectors)
}

/// Effective video size.
///
/// DOM equivalent: `video.videoWidth || video.width || video.clientWidth`,
/// per dimension.
#[must_use]
pub fn video_size(accessor: &dyn DocumentAccessor, node: &NodeRef) -> (f64, f64) {
    let (natural_w, natural_h) = accessor.intrinsic_size(node).unwrap_or((0.0, 0.0));
    let rect = accessor.bounding_rect(node);
    let pick = |natural: f64, attr: &str, rendered: f64| {
        if natural > 0.0 {
            return natural;
        }
        node.attr(attr)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| *v > 0.0)
            .unwrap_or(rendered)
    };
    (pick(natural_w, "width", rect.width), pick(natural_h, "height", rect.height))
}

/// Whether a video with this resolved source and size is content.
#[must_use]
pub fn is_valid_video(src: &str, width: f64, height: f64, rules: &VideoRules) -> bool {
    !src.trim().is_empty() && rules.min_size.admits(width, height)
}
