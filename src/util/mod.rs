//! Browser helpers shared across the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `document`/`Date` access from component and
//! network logic; each pairs a pure parser or formatter with a thin
//! csr-only reader.

pub mod cookie;
pub mod time;
