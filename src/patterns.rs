//! Compiled regex patterns used across the filters, parsers and sanitizer.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Patterns
// =============================================================================

/// Matches any run of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches strings made only of ASCII digits (page numbers, counters).
pub static DIGITS_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+$").expect("DIGITS_ONLY regex")
});

/// Matches strings with no word character, no Hangul and no whitespace.
///
/// `\w` is Unicode-aware here, so Hangul is already covered; the explicit
/// syllable range keeps the intent visible.
pub static SYMBOLS_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\w\s\x{AC00}-\x{D7A3}]+$").expect("SYMBOLS_ONLY regex")
});

// =============================================================================
// CSS Patterns
// =============================================================================

/// Extracts the first URL from a CSS `url(...)` value, quoted or bare.
pub static CSS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"url\(\s*['"]?([^'")]+?)['"]?\s*\)"#).expect("CSS_URL regex")
});

/// Matches a CSS pixel length such as `120px`, `120` or `120.5px`.
pub static CSS_PIXELS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+(?:\.[0-9]+)?)\s*(?:px)?\s*$").expect("CSS_PIXELS regex")
});

// =============================================================================
// HTML Output Patterns
// =============================================================================

/// Matches whitespace between a closing `>` and the next `<`.
pub static INTER_TAG_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">\s+<").expect("INTER_TAG_WHITESPACE regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_is_ascii() {
        assert!(DIGITS_ONLY.is_match("42"));
        assert!(!DIGITS_ONLY.is_match("42a"));
        assert!(!DIGITS_ONLY.is_match("4 2"));
    }

    #[test]
    fn symbols_only_rejects_punctuation_runs() {
        assert!(SYMBOLS_ONLY.is_match("!!!---***"));
        assert!(SYMBOLS_ONLY.is_match("→→→"));
        assert!(!SYMBOLS_ONLY.is_match("!!! wow !!!"));
        assert!(!SYMBOLS_ONLY.is_match("안녕하세요!!"));
        assert!(!SYMBOLS_ONLY.is_match("価格"));
    }

    #[test]
    fn css_url_handles_quoting() {
        let cap = |s: &str| CSS_URL.captures(s).and_then(|c| c.get(1)).map(|m| m.as_str().to_string());
        assert_eq!(cap(r#"url("a.png")"#), Some("a.png".to_string()));
        assert_eq!(cap("url('b.jpg')"), Some("b.jpg".to_string()));
        assert_eq!(cap("url(c.webp)"), Some("c.webp".to_string()));
        assert_eq!(cap("linear-gradient(red, blue), url(d.png)"), Some("d.png".to_string()));
        assert_eq!(cap("none"), None);
    }

    #[test]
    fn css_pixels_accepts_bare_numbers() {
        let px = |s: &str| CSS_PIXELS.captures(s).and_then(|c| c.get(1)).map(|m| m.as_str().to_string());
        assert_eq!(px("120px"), Some("120".to_string()));
        assert_eq!(px(" 33.5 "), Some("33.5".to_string()));
        assert_eq!(px("50%"), None);
        assert_eq!(px("auto"), None);
    }
}
