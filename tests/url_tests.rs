//! Tests for URL normalization and query-string decoding

use urlmatcher::{normalize_url, UrlConvertible};

#[test]
fn test_normalize_golden_cases() {
    let cases = [
        (
            "myapp:///////user///10//hello/??/#abc=/def",
            "myapp://user/10/hello",
        ),
        ("myapp://user/10", "myapp://user/10"),
        ("myapp:////user/10", "myapp://user/10"),
        ("myapp:/user/10", "myapp:/user/10"),
        ("https://", "https://"),
        ("myapp:/", "myapp:/"),
        ("myapp://user/", "myapp://user"),
        ("a//b///c/", "a/b/c"),
        ("////", ""),
        ("", ""),
        ("?q=1", ""),
        ("#frag", ""),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize_url(input), expected, "normalizing {input:?}");
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        "myapp:///////user///10//hello/??/#abc=/def",
        "https://example.com//a//b/",
        "myapp:/user/",
        "a//b",
        "////",
        "",
    ];
    for input in inputs {
        let once = normalize_url(input);
        assert_eq!(normalize_url(&once), once, "second pass changed {input:?}");
    }
}

#[test]
fn test_scheme_detection() {
    assert_eq!("myapp://user/10".scheme(), Some("myapp"));
    assert_eq!("mailto:someone".scheme(), Some("mailto"));
    assert_eq!("web+app://x".scheme(), Some("web+app"));
    assert_eq!("/users/10".scheme(), None);
    assert_eq!("a/b?k=v:w".scheme(), None);
    assert_eq!("user/<int:id>".scheme(), None);
    assert_eq!("://x".scheme(), None);
}

#[test]
fn test_query_pairs_split_on_ampersand_and_first_equals() {
    let url = "myapp://user/10?a=1&b=2&t=a=b&novalue&empty=";
    assert_eq!(
        url.query_pairs(),
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("t".to_string(), "a=b".to_string()),
            ("empty".to_string(), String::new()),
        ]
    );
}

#[test]
fn test_query_parameters_last_wins() {
    let url = "myapp://user/10?a=1&a=2";
    assert_eq!(url.query_parameters()["a"], "2");
}

#[test]
fn test_query_values_are_percent_decoded() {
    let url = "myapp://search?q=hello%20world&plus=a+b";
    let params = url.query_parameters();
    assert_eq!(params["q"], "hello world");
    // '+' is not a space in this decoding scheme.
    assert_eq!(params["plus"], "a+b");
}

#[test]
fn test_query_keys_stay_verbatim() {
    let url = "myapp://x?sp%20ace=v";
    let params = url.query_parameters();
    assert_eq!(params.get("sp%20ace").map(String::as_str), Some("v"));
    assert!(!params.contains_key("sp ace"));
}

#[test]
fn test_query_invalid_encoding_falls_back_to_raw() {
    let params = "myapp://x?bad=%FF&worse=%GG".query_parameters();
    assert_eq!(params["bad"], "%FF");
    assert_eq!(params["worse"], "%GG");
}

#[test]
fn test_query_ignores_fragment() {
    let params = "myapp://x?a=1#b=2".query_parameters();
    assert_eq!(params.len(), 1);
    assert_eq!(params["a"], "1");
}

#[test]
fn test_query_on_full_http_url() {
    let params = "https://example.com/bar?hello=world".query_parameters();
    assert_eq!(params["hello"], "world");
}

#[test]
fn test_query_absent_yields_empty() {
    assert!("myapp://user/10".query_pairs().is_empty());
    assert!("myapp://user/10".query_parameters().is_empty());
}

#[test]
fn test_parsed_url_implements_the_seam() {
    let url = url::Url::parse("https://example.com/bar?hello=world&hello=again").unwrap();
    assert_eq!(UrlConvertible::scheme(&url), Some("https"));
    assert_eq!(url.query_parameters()["hello"], "again");
    assert_eq!(url.url_str(), "https://example.com/bar?hello=world&hello=again");
}
