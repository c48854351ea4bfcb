//! Chat panel state and its send/receive state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call into `ChatState` through a `RwSignal`; `net::exchange`
//! brackets every request with [`ChatState::begin_submit`] and
//! [`ChatState::finish_submit`]. The panel is `Idle` while `pending` is false
//! and `Sending` while it is true; only one request is ever outstanding.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{OutboundMessage, SendError};

/// Shown for every failed request, whatever the cause.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat log entry. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Epoch milliseconds.
    pub sent_at: f64,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>, sent_at: f64) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, text: text.into(), sent_at }
    }
}

/// State for the chat panel: visibility, input draft, message log, and the
/// in-flight flag.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub visible: bool,
    /// True from the moment a request is issued until it resolves.
    pub pending: bool,
    /// Current content of the input field.
    pub draft: String,
}

impl ChatState {
    /// Fresh state whose log opens with the bot's greeting.
    pub fn with_greeting(greeting: &str, visible: bool, now: f64) -> Self {
        let mut state = Self { visible, ..Self::default() };
        if !greeting.trim().is_empty() {
            state.messages.push(ChatMessage::new(Sender::Bot, greeting, now));
        }
        state
    }

    /// Flip panel visibility and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the send button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Start a send cycle for the current draft.
    ///
    /// Returns the request body to send, or `None` when the draft is blank or
    /// a request is already outstanding; in both cases nothing changes.
    /// Otherwise the user message is appended, the draft cleared, and the
    /// panel enters `Sending`.
    pub fn begin_submit(&mut self, now: f64) -> Option<OutboundMessage> {
        if self.pending {
            leptos::logging::log!("chat: submit ignored, request already in flight");
            return None;
        }
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();

        self.messages.push(ChatMessage::new(Sender::User, text.clone(), now));
        self.draft.clear();
        self.pending = true;
        Some(OutboundMessage { message: text })
    }

    /// Put `text` in the input and submit it. Ignored while a request is
    /// outstanding, leaving the draft untouched.
    pub fn quick_reply(&mut self, text: &str, now: f64) -> Option<OutboundMessage> {
        if self.pending {
            return None;
        }
        self.set_draft(text);
        self.begin_submit(now)
    }

    /// Finish the outstanding cycle: append the bot reply, or the fallback
    /// apology on any error, and return to `Idle`.
    pub fn finish_submit(&mut self, outcome: Result<String, SendError>, now: f64) {
        if !self.pending {
            leptos::logging::warn!("chat: reply arrived with no request in flight, dropping it");
            return;
        }
        self.pending = false;

        let text = match outcome {
            Ok(text) => text,
            Err(e) => {
                leptos::logging::warn!("chat request failed: code={} error={e}", e.code());
                FALLBACK_REPLY.to_owned()
            }
        };
        self.messages.push(ChatMessage::new(Sender::Bot, text, now));
    }
}
