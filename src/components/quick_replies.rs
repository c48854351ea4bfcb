//! Canned-reply buttons under the message log.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::exchange;
use crate::state::chat::ChatState;

/// One button per configured quick reply; clicking submits it as a user
/// message. Buttons are disabled while a reply is pending.
#[component]
pub fn QuickReplies() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<WidgetConfig>();

    if config.quick_replies.is_empty() {
        return ().into_any();
    }

    let buttons = config
        .quick_replies
        .iter()
        .map(|text| {
            let label = text.clone();
            let text = text.clone();
            let config = config.clone();
            view! {
                <button
                    class="chat-widget__quick-reply"
                    type="button"
                    disabled=move || chat.get().pending
                    on:click=move |_| exchange::quick_reply(chat, config.clone(), &text)
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="quick-replies">{buttons}</div> }.into_any()
}
