//! Root widget component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, provide_meta_context};

use crate::components::{chat_launcher::ChatLauncher, chat_panel::ChatPanel};
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;
use crate::util::time::now_ms;

/// Root widget component.
///
/// Owns the panel state and provides it, together with the configuration,
/// to every child component.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::with_greeting(&config.greeting, config.start_open, now_ms()));
    let stylesheet = config.stylesheet.clone();

    provide_context(chat);
    provide_context(config);

    view! {
        {stylesheet.map(|href| view! { <Stylesheet id="chat-widget" href/> })}
        <div class="chat-widget">
            <ChatPanel/>
            <ChatLauncher/>
        </div>
    }
}
