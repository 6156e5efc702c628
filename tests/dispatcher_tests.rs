//! Tests for the URL dispatcher and handler registry
//!
//! # Test Coverage
//!
//! Validates the dispatcher's core responsibilities:
//! - Pattern validation at registration time
//! - Handler lookup and invocation for the winning pattern
//! - Handler replacement without losing tie-break position
//! - Resolution without side effects


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use urlmatcher::{PatternError, UrlDispatcher, UrlMatcher, UrlValue};

use tracing_util::TestTracing;

fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    (Arc::clone(&hits), hits)
}

#[test]
fn test_register_rejects_invalid_patterns() {
    let _tracing = TestTracing::init();
    let mut dispatcher = UrlDispatcher::new();

    let err = dispatcher
        .register("myapp://user/<>", |_, _| true)
        .unwrap_err();
    assert!(matches!(err, PatternError::EmptyPlaceholder { .. }));

    let err = dispatcher
        .register("myapp://files/<path:rest>/meta", |_, _| true)
        .unwrap_err();
    assert!(matches!(err, PatternError::ComponentAfterPath { .. }));

    let err = dispatcher
        .register("myapp://user/<ssn:number>", |_, _| true)
        .unwrap_err();
    assert_eq!(
        err,
        PatternError::UnknownConverter {
            pattern: "myapp://user/<ssn:number>".to_string(),
            tag: "ssn".to_string(),
        }
    );

    assert!(dispatcher.patterns().is_empty());
    assert!(!dispatcher.open("myapp://user/10"));
}

#[test]
fn test_open_invokes_most_specific_handler() {
    let _tracing = TestTracing::init();
    let mut dispatcher = UrlDispatcher::new();
    let (generic, generic_hits) = counter();
    let (specific, specific_hits) = counter();

    dispatcher
        .register("myapp://<section>/<id>", move |_url, _result| {
            generic.fetch_add(1, Ordering::SeqCst);
            true
        })
        .unwrap();
    dispatcher
        .register("myapp://user/<int:id>", move |url, result| {
            assert_eq!(url, "myapp://user/10");
            assert_eq!(result.values["id"], UrlValue::Int(10));
            specific.fetch_add(1, Ordering::SeqCst);
            true
        })
        .unwrap();

    assert!(dispatcher.open("myapp://user/10"));
    assert_eq!(specific_hits.load(Ordering::SeqCst), 1);
    assert_eq!(generic_hits.load(Ordering::SeqCst), 0);
}

#[test]
fn test_open_returns_false_without_match() {
    let _tracing = TestTracing::init();
    let mut dispatcher = UrlDispatcher::new();
    dispatcher
        .register("myapp://user/<int:id>", |_, _| true)
        .unwrap();
    assert!(!dispatcher.open("myapp://post/10"));
    assert!(!dispatcher.open("otherapp://user/10"));
}

#[test]
fn test_handler_can_decline_the_url() {
    let _tracing = TestTracing::init();
    let mut dispatcher = UrlDispatcher::new();
    dispatcher
        .register("myapp://user/<int:id>", |_url, result| {
            // Only even user ids are openable here.
            result.values["id"].as_int().is_some_and(|id| id % 2 == 0)
        })
        .unwrap();
    assert!(dispatcher.open("myapp://user/10"));
    assert!(!dispatcher.open("myapp://user/11"));
}

#[test]
fn test_reregistration_replaces_handler_and_keeps_order() {
    let _tracing = TestTracing::init();
    let mut dispatcher = UrlDispatcher::new();
    let (original, original_hits) = counter();
    let (shadow, shadow_hits) = counter();
    let (replacement, replacement_hits) = counter();

    dispatcher
        .register("myapp://user/<id>", move |_, _| {
            original.fetch_add(1, Ordering::SeqCst);
            true
        })
        .unwrap();
    dispatcher
        .register("myapp://user/<name>", move |_, _| {
            shadow.fetch_add(1, Ordering::SeqCst);
            true
        })
        .unwrap();
    dispatcher
        .register("myapp://user/<id>", move |_, _| {
            replacement.fetch_add(1, Ordering::SeqCst);
            true
        })
        .unwrap();

    // Equal specificity: the earliest-registered pattern still wins, now
    // with the replacement handler.
    assert!(dispatcher.open("myapp://user/10"));
    assert_eq!(replacement_hits.load(Ordering::SeqCst), 1);
    assert_eq!(original_hits.load(Ordering::SeqCst), 0);
    assert_eq!(shadow_hits.load(Ordering::SeqCst), 0);
    assert_eq!(
        dispatcher.patterns(),
        ["myapp://user/<id>", "myapp://user/<name>"]
    );
}

#[test]
fn test_resolve_does_not_invoke_handlers() {
    let _tracing = TestTracing::init();
    let mut dispatcher = UrlDispatcher::new();
    let (hits, observed) = counter();
    dispatcher
        .register("myapp://user/<int:id>", move |_, _| {
            hits.fetch_add(1, Ordering::SeqCst);
            true
        })
        .unwrap();

    let result = dispatcher.resolve("myapp://user/10").unwrap();
    assert_eq!(result.pattern, "myapp://user/<int:id>");
    assert_eq!(observed.load(Ordering::SeqCst), 0);
}

#[test]
fn test_custom_converter_through_matcher_mut() {
    let _tracing = TestTracing::init();
    let mut dispatcher = UrlDispatcher::new();
    dispatcher
        .matcher_mut()
        .register_converter("ssn", |segments: &[String], index| {
            let raw = segments.get(index)?;
            let parts: Vec<&str> = raw.split('-').collect();
            (parts.len() == 3).then(|| UrlValue::String(raw.clone()))
        });

    dispatcher
        .register("myapp://user/<ssn:number>", |_url, result| {
            result.values["number"].as_str() == Some("123-45-6789")
        })
        .unwrap();

    assert!(dispatcher.open("myapp://user/123-45-6789"));
    assert!(!dispatcher.open("myapp://user/not-ssn"));
}

#[test]
fn test_preconfigured_matcher_is_used() {
    let _tracing = TestTracing::init();
    let matcher = UrlMatcher::builder().default_scheme("myapp").build();
    let mut dispatcher = UrlDispatcher::with_matcher(matcher);
    dispatcher.register("user/<int:id>", |_, _| true).unwrap();
    assert!(dispatcher.open("myapp://user/10"));
    assert_eq!(dispatcher.matcher().default_scheme(), Some("myapp"));
}
