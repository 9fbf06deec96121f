//! Main-content extraction.
//!
//! The primary article region is found by an external readability-style
//! collaborator behind [`MainContentExtractor`]. Whatever it returns is
//! sanitized before leaving this module. When the collaborator fails, panics
//! or comes back empty, the sanitized full `<body>` is used instead, so a
//! caller always gets content.

use std::panic::{self, AssertUnwindSafe};

use dom_query::Document;
use tracing::{debug, warn};
use url::Url;

use crate::dom;
use crate::error::{panic_message, Result};
use crate::geometry::clean_text_content;
use crate::page::Page;
use crate::result::MainContent;
use crate::sanitize::sanitize_html;

/// Minimum article length, in characters, before the readability
/// collaborator accepts a candidate.
pub const DEFAULT_CHAR_THRESHOLD: usize = 500;

/// A readability-style main-content collaborator.
///
/// Implementations receive their own copy of the document and may mutate it
/// freely. The returned `content` is raw HTML; callers sanitize it.
pub trait MainContentExtractor {
    fn extract(&self, document: Document, base_url: Option<&str>) -> Result<MainContent>;
}

/// Default collaborator backed by `dom_smoothie`.
///
/// Without the `readability` feature it always reports
/// [`crate::Error::MainContentUnavailable`].
#[derive(Debug, Clone, Copy)]
pub struct ReadabilityExtractor {
    pub char_threshold: usize,
}

impl Default for ReadabilityExtractor {
    fn default() -> Self {
        Self {
            char_threshold: DEFAULT_CHAR_THRESHOLD,
        }
    }
}

#[cfg(feature = "readability")]
impl MainContentExtractor for ReadabilityExtractor {
    fn extract(&self, document: Document, base_url: Option<&str>) -> Result<MainContent> {
        use dom_smoothie::{Config, Readability};

        use crate::Error;

        let config = Config {
            char_threshold: self.char_threshold,
            ..Config::default()
        };
        let mut reader = Readability::with_document(document, base_url, Some(config))
            .map_err(|e| Error::MainContentUnavailable(e.to_string()))?;
        let article = reader
            .parse()
            .map_err(|e| Error::MainContentUnavailable(e.to_string()))?;

        Ok(MainContent {
            title: article.title,
            content: article.content.to_string(),
            text_content: article.text_content.to_string(),
        })
    }
}

#[cfg(not(feature = "readability"))]
impl MainContentExtractor for ReadabilityExtractor {
    fn extract(&self, _document: Document, _base_url: Option<&str>) -> Result<MainContent> {
        Err(crate::Error::MainContentUnavailable(
            "built without the readability feature".to_string(),
        ))
    }
}

/// Extract the page's main content through `extractor`.
///
/// The collaborator runs on a clone of the document, so the page itself is
/// never touched. On success the article title falls back to the document
/// title when empty and the article HTML is sanitized. On any failure the
/// result is [`body_fallback`].
#[must_use]
pub fn extract_main_content(page: &Page, extractor: &dyn MainContentExtractor) -> MainContent {
    let clone = dom::clone_document(page.document());
    let base_url = page.base_url().map(Url::as_str);

    let attempt = panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(clone, base_url)));

    match attempt {
        Ok(Ok(article)) if !article.content.trim().is_empty() && !article.text_content.trim().is_empty() => {
            debug!(
                content_len = article.content.len(),
                text_len = article.text_content.len(),
                "main-content extractor succeeded"
            );
            let title = clean_text_content(&article.title);
            MainContent {
                title: if title.is_empty() { page.title() } else { title },
                content: sanitize_html(&article.content),
                text_content: article.text_content,
            }
        }
        Ok(Ok(_)) => {
            warn!(url = page.url(), "main-content extractor returned an empty article, falling back to full body");
            body_fallback(page)
        }
        Ok(Err(err)) => {
            warn!(url = page.url(), error = %err, "main-content extractor failed, falling back to full body");
            body_fallback(page)
        }
        Err(payload) => {
            warn!(
                url = page.url(),
                panic = %panic_message(payload.as_ref()),
                "main-content extractor panicked, falling back to full body"
            );
            body_fallback(page)
        }
    }
}

/// The whole `<body>`: sanitized HTML plus its rendered text.
#[must_use]
pub fn body_fallback(page: &Page) -> MainContent {
    let doc = page.document();
    let text_content = doc
        .select("body")
        .nodes()
        .first()
        .map(|body| clean_text_content(&dom::rendered_text(body)))
        .unwrap_or_default();

    MainContent {
        title: page.title(),
        content: sanitize_html(&dom::body_inner_html(doc)),
        text_content,
    }
}
