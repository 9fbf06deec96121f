//! # content-sieve
//!
//! Heuristic content extraction from arbitrary web pages.
//!
//! Given a page with no schema and no cooperation from its author, the
//! extractor separates content from chrome (navigation, ads, icons, tracking
//! pixels, decorative backgrounds) using structural and geometric rules only,
//! and returns a position-ordered snapshot of texts, images and videos.
//!
//! ## Quick Start
//!
//! ```rust
//! use content_sieve::extract;
//!
//! let html = r#"<html><head><title>Headphones</title></head><body>
//!   <nav><a href="/">Home page navigation</a></nav>
//!   <h1>Wireless noise-cancelling headphones</h1>
//!   <img src="/img/main.jpg" width="600" height="600" alt="Front view">
//!   <img src="/img/pixel.gif" width="1" height="1">
//! </body></html>"#;
//!
//! let content = extract(html, "https://shop.example.com/p/42");
//! assert_eq!(content.title, "Headphones");
//! assert_eq!(content.texts[0].content, "Wireless noise-cancelling headphones");
//! assert_eq!(content.images.len(), 1);
//! assert_eq!(content.images[0].src, "https://shop.example.com/img/main.jpg");
//! ```
//!
//! ## Layout
//!
//! Visibility and position come from a [`DocumentAccessor`]. Pages built with
//! [`Page::from_html`] infer layout from markup; pages built with
//! [`Page::with_snapshot`] replay geometry recorded by a real browser.

mod error;
mod extract;
mod options;
mod page;
mod patterns;
mod result;

/// Read-only DOM helpers over `dom_query`.
pub mod dom;

/// Visibility, position and text-normalization helpers.
pub mod geometry;

/// Computed style and layout behind the `DocumentAccessor` trait.
pub mod layout;

/// Compiled exclusion selectors.
pub mod selector;

/// Per-kind filter rules.
pub mod filter;

/// Per-kind extraction drivers.
pub mod parser;

/// URL resolution and `srcset` parsing.
pub mod url_utils;

/// Charset sniffing and decoding.
pub mod encoding;

/// Allow-list HTML sanitizer.
pub mod sanitize;

/// Main-content collaborator and body fallback.
pub mod readability;

/// Tagged request/response boundary.
pub mod message;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::extract_page_content;
pub use layout::{ComputedStyle, DocumentAccessor, ElementGeometry, LayoutSnapshot, Rect, SnapshotLayout, StaticLayout};
pub use message::{handle_message, handle_message_with, handle_raw_message, Request, Response};
pub use options::{CompiledOptions, Dimensions, ParserOptions};
pub use page::Page;
pub use readability::{extract_main_content, MainContentExtractor, ReadabilityExtractor};
pub use result::{ExtractedContent, ExtractedImage, ExtractedText, ExtractedVideo, MainContent};

/// Extract a snapshot from an HTML string with default options.
#[must_use]
pub fn extract(html: &str, url: &str) -> ExtractedContent {
    extract_with_options(html, url, &ParserOptions::default())
}

/// Extract a snapshot from an HTML string.
///
/// # Example
///
/// ```rust
/// use content_sieve::{extract_with_options, Dimensions, ParserOptions};
///
/// let html = r#"<img src="thumb.jpg" width="80" height="80">"#;
/// let options = ParserOptions {
///     min_image_size: Some(Dimensions::new(50.0, 50.0)),
///     ..ParserOptions::default()
/// };
/// let content = extract_with_options(html, "https://x.com/", &options);
/// assert_eq!(content.images.len(), 1);
/// ```
#[must_use]
pub fn extract_with_options(html: &str, url: &str, options: &ParserOptions) -> ExtractedContent {
    let page = Page::from_html(html, url);
    extract_page_content(&page, &options.compile(), &ReadabilityExtractor::default())
}

/// Extract a snapshot from raw HTML bytes, decoding by the declared charset.
///
/// ```rust
/// use content_sieve::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// assert_eq!(extract_bytes(html, "https://x.com/").title, "Café");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], url: &str) -> ExtractedContent {
    let page = Page::from_bytes(html, url);
    extract_page_content(&page, &ParserOptions::default().compile(), &ReadabilityExtractor::default())
}
