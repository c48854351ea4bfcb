//! HTTP call to the chatbot endpoint.
//!
//! Client-side (csr): a real `POST` via `gloo-net`, raced against a
//! `gloo-timers` timeout. Native builds: a stub returning
//! [`SendError::Unknown`] since there is no browser to send from.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped into a [`SendError`] variant and returned; the
//! caller decides what the user sees. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use std::future::Future;

use super::types::{OutboundMessage, SendError};
#[cfg(any(test, feature = "csr"))]
use super::types::ServerReply;
use crate::config::WidgetConfig;

/// Interpret a reply body. The HTTP status only enriches the error detail;
/// success is decided by the body's `status` field.
#[cfg(any(test, feature = "csr"))]
fn interpret_body(http_status: u16, body: &str) -> Result<String, SendError> {
    let reply: ServerReply = serde_json::from_str(body)
        .map_err(|e| SendError::Protocol(format!("malformed body (HTTP {http_status}): {e}")))?;
    reply.into_text()
}

/// Resolve with `exchange` unless `timer` fires first.
#[cfg(any(test, feature = "csr"))]
async fn race_timeout<F, T>(exchange: F, timer: T, ms: u32) -> Result<String, SendError>
where
    F: Future<Output = Result<String, SendError>>,
    T: Future<Output = ()>,
{
    use futures::future::{Either, select};

    futures::pin_mut!(exchange, timer);
    match select(exchange, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(SendError::Timeout { ms }),
    }
}

/// `POST` one user message to the configured endpoint and return the bot's
/// reply text.
///
/// # Errors
///
/// - [`SendError::Network`] if the request cannot complete or the body
///   cannot be read.
/// - [`SendError::Timeout`] if no reply arrives within
///   `config.request_timeout_ms`.
/// - [`SendError::Protocol`] if the body is malformed or not a success reply.
/// - [`SendError::Unknown`] if the request cannot be built, or outside the
///   browser.
pub async fn post_chat_message(config: &WidgetConfig, body: &OutboundMessage) -> Result<String, SendError> {
    #[cfg(feature = "csr")]
    {
        let mut builder = gloo_net::http::Request::post(&config.endpoint);
        match crate::util::cookie::read_cookie(&config.csrf_cookie) {
            Some(token) => builder = builder.header(&config.csrf_header, &token),
            None => leptos::logging::warn!("chat: no {} cookie, sending without CSRF header", config.csrf_cookie),
        }
        let request = builder.json(body).map_err(|e| SendError::Unknown(e.to_string()))?;

        let exchange = async move {
            let resp = request.send().await.map_err(|e| SendError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| SendError::Network(e.to_string()))?;
            log::debug!("chatbot reply: http={status} body={text}");
            interpret_body(status, &text)
        };

        let ms = config.request_timeout_ms;
        race_timeout(exchange, gloo_timers::future::TimeoutFuture::new(ms), ms).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, body);
        Err(SendError::Unknown("not available outside the browser".to_owned()))
    }
}
