//! Result types for extraction output.
//!
//! Field names are part of the wire format consumed by the downstream
//! analysis service and must stay stable.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A fragment of page text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Whitespace-normalized, non-empty text.
    pub content: String,

    /// Lowercase tag name of the element the text came from.
    #[serde(rename = "tagName")]
    pub tag_name: String,

    /// Vertical document offset of the element.
    pub position: f64,
}

/// A content image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedImage {
    /// Absolute URL.
    pub src: String,
    pub alt: String,
    pub width: f64,
    pub height: f64,
    pub position: f64,
}

/// A content video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedVideo {
    /// Absolute URL.
    pub src: String,

    /// Absolute poster URL, or empty.
    pub poster: String,
    pub width: f64,
    pub height: f64,

    /// Seconds; `0` when unknown.
    pub duration: f64,
    pub position: f64,
}

/// Snapshot of one page, produced once per extraction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub url: String,
    pub title: String,
    pub texts: Vec<ExtractedText>,
    pub images: Vec<ExtractedImage>,
    pub videos: Vec<ExtractedVideo>,

    /// Sanitized main-content HTML.
    pub html_body: String,

    /// Capture time, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Primary content region of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainContent {
    pub title: String,

    /// Sanitized HTML.
    pub content: String,

    /// Plain text.
    #[serde(rename = "textContent")]
    pub text_content: String,
}

/// Current time in epoch milliseconds.
///
/// DOM equivalent: `Date.now()`
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_serializes_camel_case_tag_name() {
        let text = ExtractedText {
            content: "Hello world".to_string(),
            tag_name: "p".to_string(),
            position: 12.0,
        };
        let json = serde_json::to_value(&text).expect("serializable");

        assert_eq!(json["tagName"], "p");
        assert!(json.get("tag_name").is_none());
    }

    #[test]
    fn test_main_content_wire_names() {
        let main = MainContent {
            title: "T".to_string(),
            content: "<p>x</p>".to_string(),
            text_content: "x".to_string(),
        };
        let json = serde_json::to_value(&main).expect("serializable");

        assert_eq!(json["textContent"], "x");
    }

    #[test]
    fn test_content_keeps_html_body_snake_case() {
        let content = ExtractedContent {
            url: "https://x.com/".to_string(),
            title: String::new(),
            texts: Vec::new(),
            images: Vec::new(),
            videos: Vec::new(),
            html_body: String::new(),
            timestamp: 1,
        };
        let json = serde_json::to_value(&content).expect("serializable");

        assert!(json.get("html_body").is_some());
        assert_eq!(json["texts"], serde_json::json!([]));
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(now_millis() > 1_577_836_800_000);
    }
}
