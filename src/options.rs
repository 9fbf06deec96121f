//! Configuration options for content extraction.
//!
//! `ParserOptions` is the caller-facing surface: every field is optional and
//! falls back to the per-kind defaults of the filter modules. It is compiled
//! once per extraction call into `CompiledOptions`, which holds parsed
//! selector sets and resolved thresholds for each media kind.

use serde::{Deserialize, Serialize};

use crate::filter::image::ImageRules;
use crate::filter::text::TextRules;
use crate::filter::video::VideoRules;

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `width x height` is at least this size in both directions.
    #[must_use]
    pub fn admits(&self, width: f64, height: f64) -> bool {
        width >= self.width && height >= self.height
    }
}

/// Caller-supplied extraction options.
///
/// Deserializes from the camelCase JSON carried by an `EXTRACT_CONTENT`
/// request. Omitted fields keep their defaults.
///
/// # Example
///
/// ```rust
/// use content_sieve::ParserOptions;
///
/// let options: ParserOptions = serde_json::from_str(
///     r#"{"minTextLength": 20, "excludeSelectors": [".promo"]}"#,
/// )?;
/// let compiled = options.compile();
/// assert_eq!(compiled.text.min_text_length, 20);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserOptions {
    /// Minimum length of normalized text, in characters.
    ///
    /// Default: `10`
    pub min_text_length: Option<usize>,

    /// Minimum image size.
    ///
    /// Default: `100 x 100`
    pub min_image_size: Option<Dimensions>,

    /// Tags never extracted as text.
    ///
    /// Default: `script, style, noscript, iframe, svg, path, meta, link, head`
    pub exclude_tags: Option<Vec<String>>,

    /// Exclusion selectors. When present they replace the default list of
    /// every kind (text, image and video).
    ///
    /// Default: per-kind lists in `filter::{text, image, video}`
    pub exclude_selectors: Option<Vec<String>>,

    /// Minimum video size.
    ///
    /// Default: `200 x 150`
    pub min_video_size: Option<Dimensions>,

    /// Largest accepted image width/height ratio; its reciprocal is the
    /// smallest.
    ///
    /// Default: `10.0`
    pub max_aspect_ratio: Option<f64>,
}

impl ParserOptions {
    /// Resolve defaults and parse selectors.
    ///
    /// Invalid selectors are dropped here (and logged), never at match time.
    #[must_use]
    pub fn compile(&self) -> CompiledOptions {
        let selectors = self.exclude_selectors.as_deref();

        let mut text = TextRules::with_selectors(selectors);
        if let Some(min) = self.min_text_length {
            text.min_text_length = min;
        }
        if let Some(tags) = &self.exclude_tags {
            text.exclude_tags.clone_from(tags);
        }

        let mut image = ImageRules::with_selectors(selectors);
        if let Some(min) = self.min_image_size {
            image.min_size = min;
        }
        if let Some(ratio) = self.max_aspect_ratio.filter(|r| r.is_finite() && *r >= 1.0) {
            image.max_aspect_ratio = ratio;
        }

        let mut video = VideoRules::with_selectors(selectors);
        if let Some(min) = self.min_video_size {
            video.min_size = min;
        }

        CompiledOptions { text, image, video }
    }
}

/// Options with defaults applied and selectors parsed.
#[derive(Debug, Default)]
pub struct CompiledOptions {
    pub text: TextRules,
    pub image: ImageRules,
    pub video: VideoRules,
}
