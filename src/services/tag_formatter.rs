//! Tag Formatter for linkstash.
//!
//! Splits a raw title into HTML-escaped prose and the `#tag` tokens embedded
//! in it. Tags are never stored on their own; they are recomputed from the
//! title every time it is shown.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::bookmark::{FormattedTitle, TagLink};

/// `#` plus word characters, at the start of the text or after a non-word
/// character. Group 1 is the tag itself.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\W)(#\w+)").expect("tag pattern is valid"));

/// Escapes the five HTML-special characters.
///
/// The replacements are all named entities so the escaped text never gains a
/// `#` that could be mistaken for a tag.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Filter query selecting every bookmark tagged with `tag`.
pub fn tag_href(tag: &str) -> String {
    format!("?filter={}", urlencoding::encode(tag))
}

/// Formats a raw title into escaped prose plus its tag links.
///
/// Tags are returned in first-seen order with duplicates kept.
pub fn format_title(raw_title: &str) -> FormattedTitle {
    let escaped = escape_html(raw_title);

    let mut tags = Vec::new();
    let mut prose = String::with_capacity(escaped.len());
    let mut cursor = 0;
    for caps in TAG_PATTERN.captures_iter(&escaped) {
        let Some(tag) = caps.get(1) else { continue };
        prose.push_str(&escaped[cursor..tag.start()]);
        cursor = tag.end();
        tags.push(TagLink {
            tag: tag.as_str().to_string(),
            href: tag_href(tag.as_str()),
        });
    }
    prose.push_str(&escaped[cursor..]);

    let display = if tags.is_empty() {
        escaped
    } else {
        prose.split_whitespace().collect::<Vec<_>>().join(" ")
    };

    FormattedTitle { display, tags }
}

/// Tags of a title in first-seen order, duplicates kept.
pub fn extract_tags(raw_title: &str) -> Vec<String> {
    format_title(raw_title)
        .tags
        .into_iter()
        .map(|t| t.tag)
        .collect()
}

/// Renders a formatted title as an HTML fragment: the prose followed by one
/// anchor per tag.
pub fn render_html(formatted: &FormattedTitle) -> String {
    let mut out = formatted.display.clone();
    for link in &formatted.tags {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!(
            r#"<a class="hash" href="{}">{}</a>"#,
            link.href, link.tag
        ));
    }
    out
}
