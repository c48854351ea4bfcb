//! One send/receive cycle against the shared chat state.
//!
//! `submit_draft` and `quick_reply` enter `Sending` synchronously, then spawn
//! the request on the local executor and resolve the cycle when it returns.
//! Outside the browser there is nothing to send with, so the cycle resolves
//! immediately with the stub's error.

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;

use std::future::Future;

use leptos::prelude::{RwSignal, Update};

use super::types::{OutboundMessage, SendError};
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;
use crate::util::time::now_ms;

/// Submit whatever is in the input field.
pub fn submit_draft(chat: RwSignal<ChatState>, config: WidgetConfig) {
    let outbound = chat.try_update(|c| c.begin_submit(now_ms())).flatten();
    dispatch(chat, config, outbound);
}

/// Submit a canned reply as if it had been typed.
pub fn quick_reply(chat: RwSignal<ChatState>, config: WidgetConfig, text: &str) {
    let outbound = chat.try_update(|c| c.quick_reply(text, now_ms())).flatten();
    dispatch(chat, config, outbound);
}

fn dispatch(chat: RwSignal<ChatState>, config: WidgetConfig, outbound: Option<OutboundMessage>) {
    let Some(outbound) = outbound else {
        return;
    };
    let cycle = run_cycle(chat, outbound, move |body| async move {
        super::api::post_chat_message(&config, &body).await
    });

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(cycle);
    #[cfg(not(feature = "csr"))]
    poll_ready_now(cycle);
}

/// The native `post_chat_message` stub never suspends, so one poll
/// completes the cycle.
#[cfg(not(feature = "csr"))]
fn poll_ready_now<Fut: Future<Output = ()>>(cycle: Fut) {
    use std::task::{Context, Waker};

    let mut cx = Context::from_waker(Waker::noop());
    let cycle = std::pin::pin!(cycle);
    if cycle.poll(&mut cx).is_pending() {
        leptos::logging::warn!("chat: send cycle suspended without an executor, dropping it");
    }
}

/// Send `outbound` with `send` and resolve the panel's outstanding cycle.
pub async fn run_cycle<F, Fut>(chat: RwSignal<ChatState>, outbound: OutboundMessage, send: F)
where
    F: FnOnce(OutboundMessage) -> Fut,
    Fut: Future<Output = Result<String, SendError>>,
{
    let outcome = send(outbound).await;
    chat.update(|c| c.finish_submit(outcome, now_ms()));
}
