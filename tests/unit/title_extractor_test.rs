//! Unit tests for title extraction from fetched page bytes.

use linkstash::services::title_extractor::{
    decode_entities, extract_title, join_title, strip_scheme, transcode,
};

#[test]
fn test_title_tag_is_case_insensitive_and_may_carry_attributes() {
    let body = b"<html><head><TiTlE data-x=\"1\">Hello World</TiTlE></head></html>";
    assert_eq!(extract_title(Some(body), "https://a.example", ""), "Hello World");
}

#[test]
fn test_first_title_wins() {
    let body = b"<title>First</title><svg><title>Second</title></svg>";
    assert_eq!(extract_title(Some(body), "https://a.example", ""), "First");
}

#[test]
fn test_title_whitespace_is_collapsed() {
    let body = b"<title>\n   Spread\n\tover   lines  \n</title>";
    assert_eq!(
        extract_title(Some(body), "https://a.example", ""),
        "Spread over lines"
    );
}

#[test]
fn test_latin1_title_is_transcoded() {
    let body = b"<title>Cr\xe8me br\xfbl\xe9e</title>";
    assert_eq!(
        extract_title(Some(body), "https://a.example", ""),
        "Crème brûlée"
    );
}

#[test]
fn test_utf8_title_is_kept() {
    let body = "<title>Привет, мир</title>".as_bytes();
    assert_eq!(extract_title(Some(body), "https://a.example", ""), "Привет, мир");
}

#[test]
fn test_entities_are_decoded() {
    let body = b"<title>Tom &amp; Jerry &#8211; &quot;Classics&quot; &#x27;99</title>";
    assert_eq!(
        extract_title(Some(body), "https://a.example", ""),
        "Tom & Jerry \u{2013} \"Classics\" '99"
    );
}

#[test]
fn test_named_entities_from_the_full_table_are_decoded() {
    let body = b"<title>Caf&eacute; M&uuml;ller &ouml;l &szlig; &ccedil;a</title>";
    assert_eq!(
        extract_title(Some(body), "https://a.example", ""),
        "Caf\u{e9} M\u{fc}ller \u{f6}l \u{df} \u{e7}a"
    );
}

#[test]
fn test_latin1_bytes_and_entities_mix() {
    let body = b"<title>Gr\xfc&szlig;e aus K&ouml;ln</title>";
    assert_eq!(
        extract_title(Some(body), "https://a.example", ""),
        "Gr\u{fc}\u{df}e aus K\u{f6}ln"
    );
}

#[test]
fn test_missing_title_falls_back_to_link_without_scheme() {
    let body = b"<html><body><h1>No title</h1></body></html>";
    assert_eq!(
        extract_title(Some(body), "https://docs.example/path?q=1", ""),
        "docs.example/path?q=1"
    );
    assert_eq!(
        extract_title(Some(body), "HTTP://upper.example", ""),
        "upper.example"
    );
}

#[test]
fn test_empty_title_element_falls_back_to_link() {
    let body = b"<title></title>";
    assert_eq!(
        extract_title(Some(body), "https://empty.example", ""),
        "empty.example"
    );
    assert_eq!(
        extract_title(Some(b"<title> \n\t </title>"), "https://blank.example", ""),
        "blank.example"
    );
}

#[test]
fn test_no_body_uses_full_link() {
    assert_eq!(
        extract_title(None, "https://down.example", "#later"),
        "https://down.example #later"
    );
    assert_eq!(
        extract_title(Some(b""), "https://down.example", ""),
        "https://down.example"
    );
}

#[test]
fn test_append_text_follows_title() {
    let body = b"<title>Page</title>";
    assert_eq!(
        extract_title(Some(body), "https://a.example", "#read later"),
        "Page #read later"
    );
}

#[test]
fn test_join_title_has_no_dangling_space() {
    assert_eq!(join_title("Title", ""), "Title");
    assert_eq!(join_title("", "extra"), "extra");
    assert_eq!(join_title("  Title ", "  extra "), "Title extra");
}

#[test]
fn test_strip_scheme_leaves_other_schemes() {
    assert_eq!(strip_scheme("https://a.example"), "a.example");
    assert_eq!(strip_scheme("http://a.example"), "a.example");
    assert_eq!(strip_scheme("ftp://a.example"), "ftp://a.example");
    assert_eq!(strip_scheme("http"), "http");
}

#[test]
fn test_transcode_prefers_utf8() {
    assert_eq!(transcode("é".as_bytes()), "é");
    assert_eq!(transcode(b"\xe9"), "é");
}

#[test]
fn test_unknown_entities_are_left_alone() {
    assert_eq!(decode_entities("&bogus; & more"), "&bogus; & more");
    assert_eq!(decode_entities("no entities"), "no entities");
}
