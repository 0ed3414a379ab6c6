//! Character encoding detection and transcoding.
//!
//! Response bodies arrive as raw bytes. The charset is taken from the
//! Content-Type header when the server declares one, then from charset
//! declarations in the document head, defaulting to UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `charset=...` inside a Content-Type header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex"));

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// Extract a charset label from a Content-Type header value.
#[must_use]
pub fn header_charset(content_type: &str) -> Option<String> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect the character encoding of an HTML body.
///
/// Precedence:
/// 1. `declared` charset label (from the Content-Type header)
/// 2. `<meta charset="...">`
/// 3. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 4. UTF-8
///
/// Only the first 1024 bytes are examined for meta declarations.
#[must_use]
pub fn detect_encoding(body: &[u8], declared: Option<&str>) -> &'static Encoding {
    if let Some(label) = declared {
        if let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) {
            return encoding;
        }
    }

    let head = &body[..body.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    for pattern in [&META_CHARSET_RE, &HTTP_EQUIV_CHARSET_RE] {
        if let Some(label) = pattern
            .captures(&head_str)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
        {
            if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcode an HTML body to a UTF-8 string.
///
/// Invalid characters are replaced with the Unicode replacement character
/// rather than causing errors.
#[must_use]
pub fn transcode_to_utf8(body: &[u8], declared: Option<&str>) -> String {
    let encoding = detect_encoding(body, declared);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_charset() {
        assert_eq!(
            header_charset("text/html; charset=ISO-8859-1"),
            Some("ISO-8859-1".to_string())
        );
        assert_eq!(
            header_charset("text/html; charset=\"utf-8\""),
            Some("utf-8".to_string())
        );
        assert_eq!(header_charset("text/html"), None);
    }

    #[test]
    fn test_header_charset_wins_over_meta() {
        let html = br#"<html><head><meta charset="utf-8"></head></html>"#;
        let encoding = detect_encoding(html, Some("windows-1252"));
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn test_detect_from_meta_charset() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>x</body></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per the WHATWG spec
        assert_eq!(detect_encoding(html, None).name(), "windows-1252");
    }

    #[test]
    fn test_detect_from_http_equiv() {
        let html = br#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1"></head></html>"#;
        assert_eq!(detect_encoding(html, None).name(), "windows-1252");
    }

    #[test]
    fn test_default_utf8() {
        let html = b"<html><body>x</body></html>";
        assert_eq!(detect_encoding(html, None), UTF_8);
    }

    #[test]
    fn test_transcode_latin1_body() {
        // "Café" in ISO-8859-1
        let body = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        let text = transcode_to_utf8(body, None);
        assert!(text.contains("Café"));
    }

    #[test]
    fn test_transcode_utf8_passthrough() {
        let body = "<html><body>héllo</body></html>".as_bytes();
        assert_eq!(
            transcode_to_utf8(body, None),
            "<html><body>héllo</body></html>"
        );
    }
}
