//! Networking modules for the chatbot endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call, `exchange` drives one send/receive cycle
//! against the panel state, and `types` defines the wire schema and errors.

pub mod api;
pub mod exchange;
pub mod types;
