//! The document being extracted from.
//!
//! A [`Page`] bundles the parsed document, the accessor that answers layout
//! questions about it, and the URL it was loaded from. It is read-only for
//! the whole extraction pass.

use std::fmt;

use dom_query::Document;
use url::Url;

use crate::dom;
use crate::encoding::decode_html;
use crate::geometry::clean_text_content;
use crate::layout::{DocumentAccessor, LayoutSnapshot, SnapshotLayout, StaticLayout};
use crate::url_utils::{document_base_url, resolve};

pub struct Page {
    document: Document,
    url: String,
    base_url: Option<Url>,
    accessor: Box<dyn DocumentAccessor>,
}

impl Page {
    /// Bind a document to an accessor built for it.
    ///
    /// The accessor must have been created from this very `document`; node
    /// ids are not portable between parses.
    #[must_use]
    pub fn new(document: Document, url: &str, accessor: Box<dyn DocumentAccessor>) -> Self {
        let page_url = Url::parse(url).ok();
        let base_url = document_base_url(&document, page_url.as_ref());
        Self {
            document,
            url: url.to_string(),
            base_url,
            accessor,
        }
    }

    /// Parse `html` and infer layout from the markup.
    ///
    /// # Example
    ///
    /// ```rust
    /// use content_sieve::Page;
    ///
    /// let page = Page::from_html("<title> Deals </title><p>Hi</p>", "https://shop.example.com/");
    /// assert_eq!(page.title(), "Deals");
    /// assert_eq!(page.resolve_url("/cart"), "https://shop.example.com/cart");
    /// ```
    #[must_use]
    pub fn from_html(html: &str, url: &str) -> Self {
        let document = dom::parse(html);
        let accessor = StaticLayout::new(&document);
        Self::new(document, url, Box::new(accessor))
    }

    /// Parse `html` and replay layout recorded by a browser.
    #[must_use]
    pub fn with_snapshot(html: &str, url: &str, snapshot: LayoutSnapshot) -> Self {
        let document = dom::parse(html);
        let accessor = SnapshotLayout::new(&document, snapshot);
        Self::new(document, url, Box::new(accessor))
    }

    /// Decode raw bytes using their declared charset, then [`Page::from_html`].
    #[must_use]
    pub fn from_bytes(bytes: &[u8], url: &str) -> Self {
        Self::from_html(&decode_html(bytes), url)
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn accessor(&self) -> &dyn DocumentAccessor {
        self.accessor.as_ref()
    }

    /// The URL the page was loaded from, as given.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Base URL for relative references: `<base href>`, else the page URL.
    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// DOM equivalent: `document.title`
    #[must_use]
    pub fn title(&self) -> String {
        self.document
            .select("title")
            .nodes()
            .first()
            .map(|node| clean_text_content(&node.text()))
            .unwrap_or_default()
    }

    /// Resolve an attribute value against the page's base URL.
    #[must_use]
    pub fn resolve_url(&self, url: &str) -> String {
        resolve(url.trim(), self.base_url.as_ref())
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.url)
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}
