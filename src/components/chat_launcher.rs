//! Floating button that opens and closes the panel.

use leptos::prelude::*;

use crate::state::chat::ChatState;

#[component]
pub fn ChatLauncher() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let label = move || if chat.get().visible { "Close chat" } else { "Open chat" };

    view! {
        <button
            class="chat-widget__launcher"
            class:chat-widget__launcher--open=move || chat.get().visible
            type="button"
            aria-label=label
            title=label
            on:click=move |_| {
                chat.update(|c| {
                    c.toggle();
                });
            }
        >
            "💬"
        </button>
    }
}
