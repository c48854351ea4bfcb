//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `RwSignal<ChatState>` and
//! `WidgetConfig` from Leptos context. Rendering decisions that do not need
//! a document live in plain functions next to the component that uses them.

pub mod chat_launcher;
pub mod chat_message;
pub mod chat_panel;
pub mod quick_replies;
