//! URL Utility Functions
//!
//! Resolution of possibly-relative attribute values against the page's base
//! URL, mirroring what a browser does for `img.src` and `new URL(url, base)`.

use url::Url;

use crate::dom::{self, Document};

/// Resolve a possibly-relative URL against `base`.
///
/// DOM equivalent: `new URL(url, base).href`
///
/// Never fails: when `base` is missing or unparsable and `url` is not itself
/// absolute, or when joining fails, the original string is returned
/// unchanged.
///
/// # Example
///
/// ```rust
/// use content_sieve::url_utils::to_absolute_url;
///
/// assert_eq!(to_absolute_url("/a/b", Some("https://x.com/y/")), "https://x.com/a/b");
/// assert_eq!(to_absolute_url("http://[bad", Some("https://x.com/")), "http://[bad");
/// ```
#[must_use]
pub fn to_absolute_url(url_str: &str, base: Option<&str>) -> String {
    let base = base.and_then(|b| Url::parse(b).ok());
    resolve(url_str, base.as_ref())
}

/// Resolve against an already-parsed base URL.
///
/// Same contract as [`to_absolute_url`]; used on the hot path so the base is
/// parsed once per page rather than once per attribute.
#[must_use]
pub fn resolve(url_str: &str, base: Option<&Url>) -> String {
    let joined = match base {
        Some(base) => base.join(url_str),
        None => Url::parse(url_str),
    };
    match joined {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Determine the document base URL.
///
/// The first `<base href>` wins, resolved against the page URL; otherwise the
/// page URL itself. Returns `None` when neither yields an absolute URL.
#[must_use]
pub fn document_base_url(doc: &Document, page_url: Option<&Url>) -> Option<Url> {
    let base_href = doc
        .select("base[href]")
        .nodes()
        .first()
        .and_then(|node| dom::non_empty_attr(node, "href"));

    match (base_href, page_url) {
        (Some(href), Some(page)) => page.join(&href).ok().or_else(|| Some(page.clone())),
        (Some(href), None) => Url::parse(&href).ok(),
        (None, page) => page.cloned(),
    }
}

/// Whether a URL points at an SVG resource, by data-URI type or path suffix.
///
/// The suffix test matches `.svg` anywhere in the string so query-string
/// sprites such as `icons.svg#cart` are caught too.
#[must_use]
pub fn is_svg_url(url_str: &str) -> bool {
    let lower = url_str.trim().to_ascii_lowercase();
    lower.starts_with("data:image/svg") || lower.contains(".svg")
}

/// Split a `srcset` attribute into its candidate URLs, dropping descriptors.
///
/// DOM equivalent: `srcset.split(',').map(s => s.trim().split(/\s+/)[0])`
#[must_use]
pub fn parse_srcset(srcset: &str) -> Vec<String> {
    srcset
        .split(',')
        .filter_map(|candidate| candidate.split_whitespace().next())
        .filter(|url| !url.is_empty())
        .map(ToString::to_string)
        .collect()
}
