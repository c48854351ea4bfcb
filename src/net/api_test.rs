use futures::executor::block_on;
use futures::future::{pending, ready};

use super::*;

// =============================================================
// interpret_body
// =============================================================

#[test]
fn interpret_body_returns_success_text() {
    let out = interpret_body(200, r#"{"status":"success","response":"Your order is out for delivery."}"#);
    assert_eq!(out, Ok("Your order is out for delivery.".to_owned()));
}

#[test]
fn interpret_body_ignores_http_status_when_body_is_success() {
    let out = interpret_body(203, r#"{"status":"success","response":"ok"}"#);
    assert_eq!(out, Ok("ok".to_owned()));
}

#[test]
fn interpret_body_maps_error_reply_to_protocol_error() {
    let out = interpret_body(500, r#"{"status":"error","message":"Gemini quota exceeded"}"#);
    assert_eq!(out, Err(SendError::Protocol("Gemini quota exceeded".to_owned())));
}

#[test]
fn interpret_body_reports_malformed_body_with_http_status() {
    let err = interpret_body(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err.code(), "E_PROTOCOL");
    assert!(err.to_string().contains("HTTP 502"));
}

// =============================================================
// race_timeout
// =============================================================

#[test]
fn race_timeout_returns_exchange_outcome_when_it_finishes_first() {
    let out = block_on(race_timeout(ready(Ok("hi".to_owned())), pending::<()>(), 100));
    assert_eq!(out, Ok("hi".to_owned()));
}

#[test]
fn race_timeout_passes_exchange_errors_through() {
    let out = block_on(race_timeout(
        ready(Err(SendError::Network("offline".to_owned()))),
        pending::<()>(),
        100,
    ));
    assert_eq!(out, Err(SendError::Network("offline".to_owned())));
}

#[test]
fn race_timeout_yields_timeout_when_timer_fires_first() {
    let out = block_on(race_timeout(pending::<Result<String, SendError>>(), ready(()), 30_000));
    assert_eq!(out, Err(SendError::Timeout { ms: 30_000 }));
}

// =============================================================
// post_chat_message (native stub)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn post_chat_message_is_unavailable_outside_browser() {
    let config = WidgetConfig::with_endpoint("/chatbot/");
    let body = OutboundMessage { message: "hello".to_owned() };
    let out = block_on(post_chat_message(&config, &body));
    assert!(matches!(out, Err(SendError::Unknown(_))));
}
