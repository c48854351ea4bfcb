//! Client-side widget state.
//!
//! DESIGN
//! ======
//! All panel state lives in one `ChatState` behind a `RwSignal`, so the
//! send cycle and the view agree on a single source of truth.

pub mod chat;
