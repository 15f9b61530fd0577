//! Title Extractor for linkstash.
//!
//! Turns the raw bytes of a fetched page into a plain-text UTF-8 title. This
//! never fails: pages without a `<title>` fall back to the link, undecodable
//! bytes fall back to lossy UTF-8, and unknown entities are left as written.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::bytes::Regex;
use scraper::Html;

/// First `<title ...>` element, text up to the next `<`. Byte-oriented so
/// legacy-encoded pages match before any decoding happens.
static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)<title[^>]*>([^<]+)").expect("title pattern is valid"));

/// Produces the title to store for a page.
///
/// `body` is the fetched page, `None` when nothing was fetched. `append_text`
/// is the free text typed after the URL and is always appended.
pub fn extract_title(body: Option<&[u8]>, fallback_link: &str, append_text: &str) -> String {
    let candidate = match body {
        Some(bytes) if !bytes.is_empty() => {
            let title = TITLE_PATTERN
                .captures(bytes)
                .and_then(|caps| caps.get(1))
                .map(|m| collapse_whitespace(&decode_entities(&transcode(m.as_bytes()))))
                .filter(|t| !t.is_empty());
            title.unwrap_or_else(|| strip_scheme(fallback_link).to_string())
        }
        _ => fallback_link.to_string(),
    };
    join_title(&candidate, append_text)
}

/// Decodes title bytes as UTF-8, or as Latin-1 (windows-1252) when they are not
/// valid UTF-8.
pub fn transcode(raw: &[u8]) -> Cow<'_, str> {
    if let Ok(s) = std::str::from_utf8(raw) {
        return Cow::Borrowed(s);
    }
    let (decoded, had_errors) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(raw);
    if !had_errors {
        return decoded;
    }
    tracing::debug!("title bytes are neither UTF-8 nor Latin-1, decoding lossily");
    String::from_utf8_lossy(raw)
}

/// Removes a leading `http://` or `https://`, ignoring case.
pub fn strip_scheme(link: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if link.len() >= scheme.len()
            && link.is_char_boundary(scheme.len())
            && link[..scheme.len()].eq_ignore_ascii_case(scheme)
        {
            return &link[scheme.len()..];
        }
    }
    link
}

/// `title appendText`, trimmed, without a dangling space when either side is empty.
pub fn join_title(title: &str, append_text: &str) -> String {
    format!("{} {}", title.trim(), append_text.trim())
        .trim()
        .to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes HTML character references, numeric and the full named table.
///
/// The text is parsed as an HTML fragment so references resolve exactly as a
/// browser would show them. Unknown references are kept as written.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }
    Html::parse_fragment(input)
        .root_element()
        .text()
        .collect()
}
