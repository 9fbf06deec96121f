//! Extraction orchestrator.
//!
//! Composes the parsers and the main-content step into one
//! [`ExtractedContent`] snapshot. No filtering happens here; every
//! exclusion rule belongs to a filter module.

use tracing::info;

use crate::options::CompiledOptions;
use crate::page::Page;
use crate::parser::{extract_images, extract_texts, extract_videos, ExtractionContext};
use crate::readability::{extract_main_content, MainContentExtractor};
use crate::result::{now_millis, ExtractedContent};

/// Run one full extraction pass over `page`.
///
/// Parsers run in a fixed order (texts, images, videos) over one fresh
/// [`ExtractionContext`], so processed-node and seen-URL state never leaks
/// between calls.
#[must_use]
pub fn extract_page_content(
    page: &Page,
    options: &CompiledOptions,
    main_content: &dyn MainContentExtractor,
) -> ExtractedContent {
    let mut ctx = ExtractionContext::new(page);
    let texts = extract_texts(&mut ctx, &options.text);
    let images = extract_images(&mut ctx, &options.image);
    let videos = extract_videos(&mut ctx, &options.video);
    let main = extract_main_content(page, main_content);

    info!(
        url = page.url(),
        texts = texts.len(),
        images = images.len(),
        videos = videos.len(),
        html_body_len = main.content.len(),
        "extracted page content"
    );

    ExtractedContent {
        url: page.url().to_string(),
        title: page.title(),
        texts,
        images,
        videos,
        html_body: main.content,
        timestamp: now_millis(),
    }
}
