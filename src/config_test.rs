use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn from_lookup_applies_defaults() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("endpoint", "/chatbot/")])).unwrap();
    assert_eq!(cfg.endpoint, "/chatbot/");
    assert_eq!(cfg.csrf_cookie, "csrftoken");
    assert_eq!(cfg.csrf_header, "X-CSRFToken");
    assert_eq!(cfg.request_timeout_ms, 30_000);
    assert_eq!(cfg.title, DEFAULT_TITLE);
    assert_eq!(cfg.greeting, DEFAULT_GREETING);
    assert_eq!(cfg.quick_replies.len(), 4);
    assert_eq!(cfg.quick_replies[0], "Track my order");
    assert!(!cfg.start_open);
    assert!(!cfg.debug);
    assert!(cfg.stylesheet.is_none());
}

#[test]
fn from_lookup_matches_with_endpoint() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("endpoint", " /chatbot/ ")])).unwrap();
    assert_eq!(cfg, WidgetConfig::with_endpoint("/chatbot/"));
}

#[test]
fn default_greeting_lists_topics_on_separate_lines() {
    assert_eq!(DEFAULT_GREETING.lines().count(), 5);
    assert!(DEFAULT_GREETING.lines().nth(1).unwrap().starts_with("• Product"));
}

// =============================================================
// Endpoint
// =============================================================

#[test]
fn from_lookup_requires_endpoint() {
    let err = WidgetConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::MissingEndpoint);
    assert_eq!(err.code(), "E_MISSING_ENDPOINT");
}

#[test]
fn from_lookup_rejects_blank_endpoint() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("endpoint", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingEndpoint);
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn from_lookup_parses_overrides() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[
        ("endpoint", "https://shop.test/api/chat"),
        ("csrf-cookie", "xsrf"),
        ("csrf-header", "X-XSRF-Token"),
        ("timeout-ms", "5000"),
        ("title", "Farm Help"),
        ("greeting", "Hi there"),
        ("quick-replies", "Track my order | | Refunds|"),
        ("start-open", "1"),
        ("debug", "true"),
        ("stylesheet", "/static/chat.css"),
    ]))
    .unwrap();
    assert_eq!(cfg.endpoint, "https://shop.test/api/chat");
    assert_eq!(cfg.csrf_cookie, "xsrf");
    assert_eq!(cfg.csrf_header, "X-XSRF-Token");
    assert_eq!(cfg.request_timeout_ms, 5000);
    assert_eq!(cfg.title, "Farm Help");
    assert_eq!(cfg.greeting, "Hi there");
    assert_eq!(cfg.quick_replies, vec!["Track my order".to_owned(), "Refunds".to_owned()]);
    assert!(cfg.start_open);
    assert!(cfg.debug);
    assert_eq!(cfg.stylesheet.as_deref(), Some("/static/chat.css"));
}

#[test]
fn empty_quick_replies_disables_row() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("endpoint", "/c"), ("quick-replies", "")])).unwrap();
    assert!(cfg.quick_replies.is_empty());
}

#[test]
fn blank_optional_strings_keep_defaults() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("endpoint", "/c"), ("csrf-cookie", " "), ("title", "")]))
        .unwrap();
    assert_eq!(cfg.csrf_cookie, DEFAULT_CSRF_COOKIE);
    assert_eq!(cfg.title, DEFAULT_TITLE);
}

// =============================================================
// Invalid values
// =============================================================

#[test]
fn zero_timeout_is_invalid() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("endpoint", "/c"), ("timeout-ms", "0")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { key: "timeout-ms", value: "0".to_owned() });
    assert_eq!(err.code(), "E_INVALID_VALUE");
}

#[test]
fn non_numeric_timeout_is_invalid() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("endpoint", "/c"), ("timeout-ms", "soon")])).unwrap_err();
    assert!(err.to_string().contains("data-timeout-ms"));
}

#[test]
fn unknown_boolean_is_invalid() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("endpoint", "/c"), ("debug", "yes")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { key: "debug", value: "yes".to_owned() });
}
