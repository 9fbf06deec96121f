//! Allow-list HTML sanitizer.
//!
//! The input is parsed into a throwaway document and re-serialized by a walk
//! that keeps only allow-listed elements and attributes:
//!
//! - forbidden elements are dropped together with everything inside them
//! - other unknown elements are unwrapped; their children are still walked
//! - comments, processing instructions and doctypes disappear
//! - `on*` handlers and script-scheme `href`/`src` values are removed
//!
//! The serialized result has whitespace runs collapsed, no whitespace between
//! tags, and no leading or trailing whitespace.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::{INTER_TAG_WHITESPACE, WHITESPACE_NORMALIZE};

/// Elements kept as elements.
const ALLOWED_TAGS: &[&str] = &[
    // structure
    "div", "section", "article", "main", "aside", "header", "footer", "nav",
    // text
    "p", "span", "h1", "h2", "h3", "h4", "h5", "h6", "strong", "em", "b", "i", "u", "mark",
    "small", "del", "ins", "sub", "sup", "blockquote", "pre", "code", "br", "hr",
    // lists
    "ul", "ol", "li", "dl", "dt", "dd",
    // tables
    "table", "thead", "tbody", "tfoot", "tr", "th", "td", "caption", "colgroup", "col",
    // media
    "img", "picture", "source", "figure", "figcaption",
    // links
    "a",
    // forms
    "form", "fieldset", "legend", "label", "input", "select", "option", "textarea", "button",
    // other
    "time", "address", "abbr", "cite", "q",
];

/// Elements removed along with their content.
const FORBIDDEN_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "applet", "link", "meta", "base", "noscript",
    "template", "title",
];

const ALLOWED_ATTRS: &[&str] = &[
    "class", "id", "src", "alt", "href", "title", "srcset", "sizes", "width", "height", "loading",
    "datetime", "colspan", "rowspan", "type", "name", "value", "for",
];

const VOID_TAGS: &[&str] = &["br", "hr", "img", "source", "col", "input"];

/// URL schemes that execute script when followed.
const SCRIPT_SCHEMES: &[&str] = &["javascript:", "vbscript:"];

/// Clean an HTML fragment.
///
/// # Example
///
/// ```rust
/// use content_sieve::sanitize::sanitize_html;
///
/// let html = r#"<div onclick="steal()"> <p>Hello <script>x()</script>world</p> </div>"#;
/// assert_eq!(sanitize_html(html), "<div><p>Hello world</p></div>");
/// ```
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let doc = dom::parse(&format!("<html><body>{html}</body></html>"));
    let mut out = String::with_capacity(html.len());
    if let Some(body) = doc.select("body").nodes().first() {
        push_clean_children(body, &mut out);
    }
    tidy(&out)
}

/// One unit of pending work in the serializer walk.
enum Step<'a> {
    Visit(NodeRef<'a>),
    Close(String),
}

/// Serialize the children of `root` with an explicit stack; nesting depth
/// never reaches the call stack.
fn push_clean_children(root: &NodeRef, out: &mut String) {
    let mut stack: Vec<Step<'_>> = root.children().into_iter().rev().map(Step::Visit).collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Close(tag) => {
                out.push_str("</");
                out.push_str(&tag);
                out.push('>');
            }
            Step::Visit(node) if node.is_text() => out.push_str(&escape_html(&node.text())),
            Step::Visit(node) if node.is_element() => {
                let tag = dom::tag_name(&node).unwrap_or_default();
                if FORBIDDEN_TAGS.contains(&tag.as_str()) {
                    continue;
                }
                let children = node.children().into_iter().rev().map(Step::Visit);
                if !ALLOWED_TAGS.contains(&tag.as_str()) {
                    stack.extend(children);
                    continue;
                }

                push_open_tag(&node, &tag, out);
                if !VOID_TAGS.contains(&tag.as_str()) {
                    stack.push(Step::Close(tag));
                    stack.extend(children);
                }
            }
            Step::Visit(_) => {}
        }
    }
}

fn push_open_tag(node: &NodeRef, tag: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for attr in node.attrs() {
        let name = attr.name.local.to_ascii_lowercase();
        if !is_allowed_attr(&name, &attr.value) {
            continue;
        }
        out.push(' ');
        out.push_str(&name);
        out.push_str("=\"");
        out.push_str(&escape_html(&attr.value));
        out.push('"');
    }
    out.push('>');
}

fn is_allowed_attr(name: &str, value: &str) -> bool {
    if name.starts_with("on") {
        return false;
    }
    if !(ALLOWED_ATTRS.contains(&name) || name.starts_with("data-")) {
        return false;
    }
    if matches!(name, "href" | "src") {
        // Browsers ignore embedded tabs and newlines in schemes.
        let scheme: String = value
            .chars()
            .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
            .take(16)
            .collect::<String>()
            .to_ascii_lowercase();
        if SCRIPT_SCHEMES.iter().any(|s| scheme.starts_with(s)) {
            return false;
        }
    }
    true
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn tidy(html: &str) -> String {
    let collapsed = WHITESPACE_NORMALIZE.replace_all(html, " ");
    INTER_TAG_WHITESPACE.replace_all(&collapsed, "><").trim().to_string()
}
