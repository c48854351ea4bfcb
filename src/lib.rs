//! # chat-widget
//!
//! Leptos + WASM floating chat widget for storefront pages.
//!
//! This crate contains the widget's components, its panel state machine,
//! the HTTP exchange with the chatbot endpoint, and the browser helpers
//! (cookies, clock) the exchange depends on. A host page places a mount
//! element carrying `data-*` configuration and loads the wasm bundle;
//! [`start`] does the rest.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Id of the element the widget mounts into.
pub const MOUNT_ELEMENT_ID: &str = "chat-widget";

/// WASM entry point: read configuration from the mount element and mount
/// the widget into it.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::ChatWidget;

    console_error_panic_hook::set_once();

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
    else {
        leptos::logging::warn!("chat widget: no #{MOUNT_ELEMENT_ID} element, not mounting");
        return;
    };

    let config = match crate::config::WidgetConfig::from_lookup(|key| element.get_attribute(&format!("data-{key}"))) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("chat widget: invalid configuration: {e}");
            return;
        }
    };

    let level = if config.debug { log::Level::Debug } else { log::Level::Warn };
    let _ = console_log::init_with_level(level);

    let Ok(parent) = element.dyn_into::<web_sys::HtmlElement>() else {
        leptos::logging::error!("chat widget: #{MOUNT_ELEMENT_ID} is not an HTML element");
        return;
    };

    log::debug!("chat widget: mounting with endpoint {}", config.endpoint);
    leptos::mount::mount_to(parent, move || view! { <ChatWidget config/> }).forget();
}
