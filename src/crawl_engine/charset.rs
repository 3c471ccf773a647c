//! Body decoding for legacy pages.
//!
//! Bodies are decoded from raw bytes rather than assumed UTF-8. A byte order
//! mark wins, then the `Content-Type` charset, then a `<meta charset>` or
//! `http-equiv` declaration in the document. Undeclared bodies are UTF-8 when
//! they validate and windows-1252 otherwise.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::bytes::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// Covers both `<meta charset="x">` and `<meta http-equiv content="text/html; charset=x">`
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_.:-]+)"#)
        .expect("BUG: hardcoded meta charset regex is invalid")
});

/// Encoding named by the `charset` parameter of a `Content-Type` value
#[must_use]
pub fn header_charset(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .and_then(|(_, value)| {
            let label = value.trim().trim_matches(|c| c == '"' || c == '\'');
            Encoding::for_label(label.as_bytes())
        })
}

/// Encoding declared by a `<meta>` tag in the document
#[must_use]
pub fn meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let label = META_CHARSET.captures(body)?.get(1)?;
    // A declaration readable as ASCII rules out UTF-16
    Encoding::for_label(label.as_bytes()).map(|encoding| encoding.output_encoding())
}

/// Decode a page body to text using the declared or sniffed encoding.
///
/// Malformed sequences become U+FFFD; decoding itself never fails.
pub fn decode_body<'a>(body: &'a [u8], content_type: Option<&str>) -> Cow<'a, str> {
    let encoding = content_type
        .and_then(header_charset)
        .or_else(|| meta_charset(body))
        .unwrap_or_else(|| {
            if Encoding::utf8_valid_up_to(body) == body.len() {
                UTF_8
            } else {
                WINDOWS_1252
            }
        });

    let (text, used, had_errors) = encoding.decode(body);
    log::trace!(target: "lgfc::scrape", "Decoded {} bytes as {}", body.len(), used.name());
    if had_errors {
        log::debug!(
            target: "lgfc::scrape",
            "Body contained bytes invalid in {}; replaced",
            used.name()
        );
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_is_honoured() {
        let text = decode_body(b"<title>Caf\xE9</title>", Some("text/html; charset=iso-8859-1"));
        assert_eq!(text, "<title>Café</title>");
    }

    #[test]
    fn quoted_header_label_is_accepted() {
        assert_eq!(
            header_charset(r#"text/html; Charset="windows-1252""#),
            Some(WINDOWS_1252)
        );
        assert_eq!(header_charset("text/html"), None);
        assert_eq!(header_charset("text/html; charset=no-such-thing"), None);
    }

    #[test]
    fn http_equiv_meta_is_sniffed() {
        let body = b"<html><head><META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=windows-1252\"></head>\
                     <body>\x93The Iron Horse\x94</body></html>";
        let text = decode_body(body, Some("text/html"));
        assert!(text.contains("\u{201C}The Iron Horse\u{201D}"));
    }

    #[test]
    fn meta_charset_attribute_is_sniffed() {
        assert_eq!(meta_charset(b"<meta charset='ISO-8859-1'>"), Some(WINDOWS_1252));
        assert_eq!(meta_charset(b"<meta charset=\"utf-16\">"), Some(UTF_8));
        assert_eq!(meta_charset(b"<p>charset=latin1</p>"), None);
    }

    #[test]
    fn header_wins_over_meta() {
        let body = "<meta charset=\"windows-1252\"><p>Café</p>".as_bytes();
        let text = decode_body(body, Some("text/html; charset=utf-8"));
        assert!(text.contains("Café"));
    }

    #[test]
    fn undeclared_bodies_fall_back_by_validity() {
        assert_eq!(decode_body("Gehrig ⚾".as_bytes(), None), "Gehrig ⚾");
        assert_eq!(decode_body(b"Caf\xE9", None), "Café");
    }

    #[test]
    fn byte_order_mark_wins() {
        let text = decode_body(b"\xEF\xBB\xBFCaf\xC3\xA9", Some("text/html; charset=iso-8859-1"));
        assert_eq!(text, "Café");
    }
}
