//! Chat panel: header, message log, quick replies, and input row.
//!
//! The input draft lives in `ChatState`, so anything reading the whole state
//! re-runs on every keystroke. The log and the auto-scroll read through memos
//! that only change when the log itself does.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::components::chat_message::{ChatMessageRow, TypingIndicator};
use crate::components::quick_replies::QuickReplies;
use crate::config::WidgetConfig;
use crate::net::exchange;
use crate::state::chat::{ChatMessage, ChatState};

/// What the auto-scroll reacts to: message count, pending flag, visibility.
pub(crate) type ScrollKey = (usize, bool, bool);

pub(crate) fn scroll_key(chat: RwSignal<ChatState>) -> Memo<ScrollKey> {
    Memo::new(move |_| chat.with(|c| (c.messages.len(), c.pending, c.visible)))
}

pub(crate) fn message_log(chat: RwSignal<ChatState>) -> Memo<Vec<ChatMessage>> {
    Memo::new(move |_| chat.with(|c| c.messages.clone()))
}

pub(crate) fn pending_flag(chat: RwSignal<ChatState>) -> Memo<bool> {
    Memo::new(move |_| chat.with(|c| c.pending))
}

/// Enter submits; Shift+Enter and Enter that confirms an IME composition
/// do not.
pub(crate) fn submits_on_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

/// Panel surface. Hidden with `display: none` while the widget is closed.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = StoredValue::new(expect_context::<WidgetConfig>());

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let scroll = scroll_key(chat);
    let messages = message_log(chat);
    let pending = pending_flag(chat);

    Effect::new(move || {
        scroll.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || exchange::submit_draft(chat, config.get_value());

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_on_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    let title = config.with_value(|c| c.title.clone());

    view! {
        <div
            class="chat-widget__panel"
            style:display=move || if chat.get().visible { "flex" } else { "none" }
        >
            <div class="chat-widget__header">
                <span class="chat-widget__title">{title}</span>
                <button
                    class="chat-widget__close"
                    type="button"
                    aria-label="Close chat"
                    on:click=move |_| {
                        chat.update(|c| {
                            c.toggle();
                        });
                    }
                >
                    "×"
                </button>
            </div>

            <div class="chat-widget__messages" node_ref=messages_ref>
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| view! { <ChatMessageRow message/> })
                        .collect::<Vec<_>>()
                }}
                {move || pending.get().then(|| view! { <TypingIndicator/> })}
            </div>

            <QuickReplies/>

            <div class="chat-widget__input-row">
                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || chat.get().draft
                    on:input=move |ev| chat.update(|c| c.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                    disabled=move || pending.get()
                />
                <button
                    class="btn btn--primary chat-widget__send"
                    type="button"
                    on:click=on_click
                    disabled=move || !chat.get().can_submit()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
