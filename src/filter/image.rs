//! Image filter rules.

use dom_query::NodeRef;

use crate::geometry::{is_element_visible, matches_excluded_selector};
use crate::layout::DocumentAccessor;
use crate::options::Dimensions;
use crate::selector::SelectorSet;

/// Icons, logos, avatars and images inside page chrome.
pub const DEFAULT_EXCLUDE_SELECTORS: &[&str] = &[
    ".icon",
    ".logo",
    "[role=\"presentation\"]",
    "[aria-hidden=\"true\"]",
    ".avatar",
    ".thumbnail",
    "nav img",
    "header img",
    "footer img",
];

pub const DEFAULT_MIN_SIZE: Dimensions = Dimensions::new(100.0, 100.0);

/// Banner strips beyond 10:1 (or 1:10) are not content.
pub const DEFAULT_MAX_ASPECT_RATIO: f64 = 10.0;

/// Active configuration for image extraction.
#[derive(Debug)]
pub struct ImageRules {
    pub min_size: Dimensions,
    pub max_aspect_ratio: f64,
    pub exclude_selectors: SelectorSet,
}

impl ImageRules {
    /// Defaults, with `selectors` replacing the default selector list when given.
    #[must_use]
    pub fn with_selectors(selectors: Option<&[String]>) -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_aspect_ratio: DEFAULT_MAX_ASPECT_RATIO,
            exclude_selectors: selectors.map_or_else(
                || SelectorSet::compile(DEFAULT_EXCLUDE_SELECTORS),
                SelectorSet::compile,
            ),
        }
    }
}

impl Default for ImageRules {
    fn default() -> Self {
        Self::with_selectors(None)
    }
}

/// Structural eligibility of an image element.
///
/// Decorative images (`role="presentation"` or `role="none"`) are excluded
/// regardless of selectors.
#[must_use]
pub fn should_extract_image(accessor: &dyn DocumentAccessor, node: &NodeRef, rules: &ImageRules) -> bool {
    if !is_element_visible(accessor, node) {
        return false;
    }
    if matches_excluded_selector(node, &rules.exclude_selectors) {
        return false;
    }
    !node.attr("role").is_some_and(|role| {
        let role = role.trim();
        role.eq_ignore_ascii_case("presentation") || role.eq_ignore_ascii_case("none")
    })
}

/// Effective image size: intrinsic when known, else rendered.
///
/// DOM equivalent: `img.naturalWidth || img.width`
#[must_use]
pub fn image_size(accessor: &dyn DocumentAccessor, node: &NodeRef) -> (f64, f64) {
    let rect = accessor.bounding_rect(node);
    let (natural_w, natural_h) = accessor.intrinsic_size(node).unwrap_or((0.0, 0.0));
    let pick = |natural: f64, rendered: f64| if natural > 0.0 { natural } else { rendered };
    (pick(natural_w, rect.width), pick(natural_h, rect.height))
}

/// Whether an image with this source and size is content.
///
/// Rejects a missing source, inline SVG data URIs, anything below
/// `rules.min_size`, exact 1x1 tracking pixels and aspect ratios outside
/// `[1 / max_aspect_ratio, max_aspect_ratio]`.
///
/// # Example
///
/// ```rust
/// use content_sieve::filter::{is_valid_image, ImageRules};
/// use content_sieve::Dimensions;
///
/// let rules = ImageRules { min_size: Dimensions::new(1.0, 1.0), ..ImageRules::default() };
/// assert!(!is_valid_image("https://t.example.com/p.gif", 1.0, 1.0, &rules));
/// assert!(is_valid_image("https://x.com/photo.jpg", 300.0, 200.0, &rules));
/// ```
#[must_use]
pub fn is_valid_image(src: &str, width: f64, height: f64, rules: &ImageRules) -> bool {
    let src = src.trim();
    if src.is_empty() || src.to_ascii_lowercase().starts_with("data:image/svg") {
        return false;
    }

    if width <= 0.0 || height <= 0.0 || !rules.min_size.admits(width, height) {
        return false;
    }

    if width == 1.0 && height == 1.0 {
        return false;
    }

    let aspect_ratio = width / height;
    aspect_ratio <= rules.max_aspect_ratio && aspect_ratio >= 1.0 / rules.max_aspect_ratio
}
