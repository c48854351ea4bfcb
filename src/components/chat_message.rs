//! One row of the message log.

#[cfg(test)]
#[path = "chat_message_test.rs"]
mod chat_message_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, Sender};
use crate::util::time::clock_label;

/// CSS classes for a message row.
pub fn message_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "message user",
        Sender::Bot => "message bot",
    }
}

/// Split message text into display lines. Each line becomes its own text
/// node separated by `<br>`, so markup in the text is never interpreted.
pub fn message_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.trim_end_matches('\r').to_owned()).collect()
}

/// A message bubble with its `HH:MM` timestamp.
#[component]
pub fn ChatMessageRow(message: ChatMessage) -> impl IntoView {
    let class = message_class(message.sender);
    let stamp = clock_label(message.sent_at);
    let lines = message_lines(&message.text);
    let last = lines.len().saturating_sub(1);

    view! {
        <div class=class>
            <div class="message-content">
                <p>
                    {lines
                        .into_iter()
                        .enumerate()
                        .map(|(i, line)| view! { {line} {(i < last).then(|| view! { <br/> })} })
                        .collect::<Vec<_>>()}
                </p>
                <div class="message-timestamp">{stamp}</div>
            </div>
        </div>
    }
}

/// Three-dot indicator shown while a reply is pending.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message bot typing">
            <div class="message-content">
                <div class="typing-indicator">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </div>
    }
}
