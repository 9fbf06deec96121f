//! Charset sniffing for pages supplied as raw bytes.
//!
//! Only the byte-order mark and the `<meta>` declarations inside the first
//! [`SNIFF_LIMIT`] bytes are consulted; anything else is decoded as UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How far into the document a charset declaration is looked for.
pub const SNIFF_LIMIT: usize = 1024;

/// `<meta charset=...>` and the `http-equiv` Content-Type form.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#).expect("valid regex")
});

/// Pick the encoding of an HTML byte stream.
///
/// A byte-order mark wins, then the first `<meta>` charset declaration that
/// names an encoding `encoding_rs` knows. Unknown labels are skipped.
#[must_use]
pub fn sniff_charset(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LIMIT)]);
    META_CHARSET
        .captures_iter(&head)
        .filter_map(|c| c.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a `String`, replacing malformed sequences with U+FFFD.
///
/// # Example
///
/// ```rust
/// use content_sieve::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = sniff_charset(bytes);
    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences while decoding");
    }
    decoded.into_owned()
}
