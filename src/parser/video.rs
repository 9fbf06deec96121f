//! Video parser.

use dom_query::NodeRef;
use tracing::debug;

use super::{sort_by_position, ExtractionContext};
use crate::dom;
use crate::filter::video::{is_valid_video, should_extract_video, video_size, VideoRules};
use crate::result::ExtractedVideo;

/// The element's own `src`, else the first child `<source src>`.
fn video_source(node: &NodeRef) -> Option<String> {
    dom::non_empty_attr(node, "src")
        .or_else(|| dom::first_descendant(node, "source").and_then(|source| dom::non_empty_attr(&source, "src")))
}

/// Collect content videos, sorted by position.
pub fn extract_videos(ctx: &mut ExtractionContext<'_>, rules: &VideoRules) -> Vec<ExtractedVideo> {
    let page = ctx.page();
    let accessor = page.accessor();
    let mut videos = Vec::new();

    for node in page.document().select("video").nodes() {
        if !should_extract_video(accessor, node, rules) {
            continue;
        }
        let Some(src) = video_source(node) else {
            continue;
        };

        let (width, height) = video_size(accessor, node);
        if !is_valid_video(&src, width, height, rules) {
            continue;
        }

        videos.push(ExtractedVideo {
            src: page.resolve_url(&src),
            poster: dom::non_empty_attr(node, "poster")
                .map(|poster| page.resolve_url(&poster))
                .unwrap_or_default(),
            width,
            height,
            duration: accessor.media_duration(node).unwrap_or(0.0),
            position: ctx.position(node),
        });
    }

    sort_by_position(&mut videos, |v| v.position);
    debug!(count = videos.len(), "extracted videos");
    videos
}
