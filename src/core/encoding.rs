//! Character encoding resolution and decoding.
//!
//! Documentation pipelines emit (X)HTML in whatever encoding the
//! authoring tool was configured with, declared either in the XML
//! declaration or in a `Content-Type` meta tag. This module resolves
//! the encoding from the document head and decodes the raw bytes to a
//! `String` via `encoding_rs`.
//!
//! Decoding never fails: an unknown label falls back to UTF-8 with a
//! warning, and the absolute worst case is an empty string for that
//! one document.

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace around `=` is insignificant in declarations
static EQ_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*=\s*").unwrap());

/// Decode a raw document using an optional configured encoding.
///
/// A non-blank `hint` wins outright and skips auto-detection.
/// Otherwise the encoding is resolved from the document head, with
/// the XML declaration taking priority over meta charset tags.
pub fn decode_document(bytes: &[u8], hint: Option<&str>) -> String {
    let label = match hint {
        Some(h) if !h.trim().is_empty() => h.trim().to_string(),
        _ => resolve_encoding(bytes),
    };

    match encoding_rs::Encoding::for_label(label.as_bytes()) {
        Some(encoding) => {
            let (text, _, had_errors) = encoding.decode(bytes);
            if had_errors {
                tracing::debug!("Replacement characters while decoding as {}", label);
            }
            text.into_owned()
        }
        None if label.eq_ignore_ascii_case("utf-8") => {
            tracing::warn!("Cannot decode document. Unsupported encoding: {}", label);
            String::new()
        }
        None => {
            tracing::warn!("Unsupported encoding '{}'. Falling back to UTF-8.", label);
            let (text, _, _) = encoding_rs::UTF_8.decode(bytes);
            text.into_owned()
        }
    }
}

/// Resolve the encoding label declared in the document head.
///
/// Only the prefix up to the first case-insensitive `<body` is
/// inspected (the whole document if no body tag exists), decoded
/// lossily as UTF-8 for scanning purposes.
pub fn resolve_encoding(bytes: &[u8]) -> String {
    let head = String::from_utf8_lossy(head_before_body(bytes));
    xml_decl_encoding(&head)
        .or_else(|| meta_charset(&head))
        .unwrap_or_else(|| "UTF-8".to_string())
}

/// Byte prefix up to (and excluding) the first `<body` tag
fn head_before_body(bytes: &[u8]) -> &[u8] {
    const BODY: &[u8] = b"<body";
    let end = bytes
        .windows(BODY.len())
        .position(|w| w.eq_ignore_ascii_case(BODY))
        .unwrap_or(bytes.len());
    &bytes[..end]
}

/// Extract the `encoding` attribute from an XML declaration.
///
/// Example: `<?xml version="1.0" encoding="UTF-8" standalone="no"?>`
fn xml_decl_encoding(head: &str) -> Option<String> {
    let start = head.find("<?xml")?;
    let end = head[start..].find("?>")? + start;

    let decl = normalize_decl(&head[start..end]);
    attr_value(&decl, "encoding=\"")
}

/// Extract the `charset` value from a `Content-Type` meta tag.
///
/// Example: `<meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>`
///
/// All meta tags in the head are scanned; the last declaration wins.
fn meta_charset(head: &str) -> Option<String> {
    let head = head.to_lowercase();
    let mut encoding = None;
    let mut pos = 0;

    while let Some(off) = head[pos..].find("<meta") {
        let tag_start = pos + off;
        pos = tag_start + 1; // continue after this meta tag

        let Some(gt) = head[tag_start..].find('>') else {
            break;
        };
        let meta = normalize_decl(&head[tag_start..=tag_start + gt]);
        if !meta.contains("http-equiv=\"content-type\"") {
            continue;
        }
        if let Some(value) = meta.rfind("charset=").and_then(|p| {
            let rest = &meta[p + "charset=".len()..];
            rest.find('"').map(|q| rest[..q].trim().to_string())
        }) {
            let value = value.trim_end_matches(';').trim().to_string();
            if !value.is_empty() {
                encoding = Some(value.to_uppercase());
            }
        }
    }
    encoding
}

/// Canonicalize a declaration span for matching: single quotes become
/// double quotes, whitespace around `=` is dropped, everything is
/// lowercased.
fn normalize_decl(decl: &str) -> String {
    EQ_WS.replace_all(&decl.replace('\'', "\""), "=").to_lowercase()
}

/// Value of `pattern` (e.g. `encoding="`) up to the closing quote
fn attr_value(decl: &str, pattern: &str) -> Option<String> {
    let start = decl.find(pattern)? + pattern.len();
    let end = decl[start..].find('"')? + start;
    let value = decl[start..end].trim();
    (!value.is_empty()).then(|| value.to_string())
}
