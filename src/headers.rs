//! Header lookup and content-type derivation
//!
//! Header names are matched case-insensitively per RFC 9110. The document
//! type is the bare MIME type from `content-type` with any parameter tail
//! (charset etc.) stripped.

use crate::event::Header;

/// Coarse content classification used by body viewers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClass {
    Json,
    Text,
    Other,
}

/// Find the first header whose name matches `key` case-insensitively
pub fn find_header<'a>(headers: &'a [Header], key: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(key))
        .map(|h| h.value.as_str())
}

/// Bare MIME type from the `content-type` header
///
/// Defaults to `"unknown"` when the header is absent; parameters after the
/// first `;` or `,` are stripped.
pub fn document_type(headers: &[Header]) -> String {
    let raw = find_header(headers, "content-type").unwrap_or("unknown");
    raw.split([';', ','])
        .next()
        .unwrap_or(raw)
        .trim()
        .to_string()
}

/// Classify response headers into {json, text, other} by MIME prefix
///
/// Correlation itself filters on the MIME subtype; this coarse class is for
/// downstream body viewers choosing how to render a payload.
pub fn classify_content_type(headers: &[Header]) -> ContentClass {
    let doc_type = document_type(headers);
    if doc_type.starts_with("application/json") {
        ContentClass::Json
    } else if doc_type.starts_with("text/") {
        ContentClass::Text
    } else {
        ContentClass::Other
    }
}
