//! Image parser.
//!
//! Three discovery streams feed one result list:
//!
//! 1. `<img>` elements, with every `src`, `srcset` and lazy-load URL of an
//!    accepted element emitted as its own item.
//! 2. `<picture>` elements, one item per `<source srcset>` URL.
//! 3. CSS background images of any rendered element.
//!
//! The streams share the context's seen-URL set, so the first stream to find
//! a URL owns it.

use dom_query::NodeRef;
use tracing::debug;

use super::{sort_by_position, ExtractionContext};
use crate::dom;
use crate::filter::image::{image_size, is_valid_image, should_extract_image, ImageRules};
use crate::geometry::{clean_text_content, is_element_visible};
use crate::patterns::CSS_URL;
use crate::result::ExtractedImage;
use crate::url_utils::{is_svg_url, parse_srcset};

/// Attributes lazy-loading scripts read the real URL from.
const LAZY_SRC_ATTRS: &[&str] = &["data-src", "data-lazy-src", "data-original"];

/// Collect content images from all three streams, sorted by position.
pub fn extract_images(ctx: &mut ExtractionContext<'_>, rules: &ImageRules) -> Vec<ExtractedImage> {
    let mut images = Vec::new();

    collect_img_elements(ctx, rules, &mut images);
    let from_img = images.len();
    collect_pictures(ctx, rules, &mut images);
    let from_picture = images.len() - from_img;
    collect_backgrounds(ctx, rules, &mut images);
    let from_background = images.len() - from_img - from_picture;

    sort_by_position(&mut images, |i| i.position);
    debug!(from_img, from_picture, from_background, "extracted images");
    images
}

/// Every URL an `<img>` may display: `src`, then `srcset`, then lazy-load
/// attributes.
fn img_sources(node: &NodeRef) -> Vec<String> {
    let mut sources = Vec::new();
    if let Some(src) = dom::non_empty_attr(node, "src") {
        sources.push(src);
    }
    if let Some(srcset) = node.attr("srcset") {
        sources.extend(parse_srcset(&srcset));
    }
    sources.extend(LAZY_SRC_ATTRS.iter().filter_map(|attr| dom::non_empty_attr(node, attr)));
    sources
}

fn alt_text(node: Option<&NodeRef>) -> String {
    node.and_then(|n| n.attr("alt"))
        .map(|alt| clean_text_content(&alt))
        .unwrap_or_default()
}

fn collect_img_elements(ctx: &mut ExtractionContext<'_>, rules: &ImageRules, out: &mut Vec<ExtractedImage>) {
    let page = ctx.page();
    let accessor = page.accessor();

    for node in page.document().select("img").nodes() {
        if !should_extract_image(accessor, node, rules) {
            continue;
        }

        let src = dom::non_empty_attr(node, "src").unwrap_or_default();
        let (width, height) = image_size(accessor, node);
        if !is_valid_image(&src, width, height, rules) {
            continue;
        }

        let alt = alt_text(Some(node));
        let position = ctx.position(node);
        for candidate in img_sources(node) {
            let absolute = page.resolve_url(&candidate);
            if !ctx.claim_url(&absolute) {
                continue;
            }
            out.push(ExtractedImage {
                src: absolute,
                alt: alt.clone(),
                width,
                height,
                position,
            });
        }
    }
}

fn collect_pictures(ctx: &mut ExtractionContext<'_>, rules: &ImageRules, out: &mut Vec<ExtractedImage>) {
    let page = ctx.page();
    let accessor = page.accessor();

    for picture in page.document().select("picture").nodes() {
        if !should_extract_image(accessor, picture, rules) {
            continue;
        }

        let img = dom::first_descendant(picture, "img");
        let (width, height) = img
            .as_ref()
            .map(|img| image_size(accessor, img))
            .filter(|(w, h)| *w > 0.0 && *h > 0.0)
            .unwrap_or_else(|| {
                let rect = accessor.bounding_rect(picture);
                (rect.width, rect.height)
            });
        let alt = alt_text(img.as_ref());
        let position = ctx.position(picture);

        for source in dom::descendants(picture, "source") {
            let Some(srcset) = source.attr("srcset") else {
                continue;
            };
            for candidate in parse_srcset(&srcset) {
                if !is_valid_image(&candidate, width, height, rules) {
                    continue;
                }
                let absolute = page.resolve_url(&candidate);
                if !ctx.claim_url(&absolute) {
                    continue;
                }
                out.push(ExtractedImage {
                    src: absolute,
                    alt: alt.clone(),
                    width,
                    height,
                    position,
                });
            }
        }
    }
}

/// First `url(...)` in a computed `background-image` value.
fn background_url(background_image: &str) -> Option<String> {
    let value = background_image.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return None;
    }
    CSS_URL
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|url| !url.is_empty())
}

fn collect_backgrounds(ctx: &mut ExtractionContext<'_>, rules: &ImageRules, out: &mut Vec<ExtractedImage>) {
    let page = ctx.page();
    let accessor = page.accessor();

    for node in dom::all_elements(page.document()) {
        if !is_element_visible(accessor, &node) {
            continue;
        }
        let Some(url) = background_url(&accessor.computed_style(&node).background_image) else {
            continue;
        };

        let absolute = page.resolve_url(&url);
        if ctx.is_seen(&absolute) || is_svg_url(&url) {
            continue;
        }

        let rect = accessor.bounding_rect(&node);
        if !rules.min_size.admits(rect.width, rect.height) {
            continue;
        }

        ctx.claim_url(&absolute);
        out.push(ExtractedImage {
            src: absolute,
            alt: String::new(),
            width: rect.width,
            height: rect.height,
            position: ctx.position(&node),
        });
    }
}
