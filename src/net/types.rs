//! Wire types and errors for the chatbot endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by one send/receive cycle.
///
/// Every variant ends up as the same apology in the log; the detail is for
/// the console only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The request could not complete (offline, DNS, CORS, aborted).
    #[error("request could not complete: {0}")]
    Network(String),

    /// No reply arrived within the configured timeout.
    #[error("no reply within {ms}ms")]
    Timeout { ms: u32 },

    /// HTTP completed but the body was not a usable success reply.
    #[error("unusable reply: {0}")]
    Protocol(String),

    /// Anything else that broke the cycle.
    #[error("unexpected failure: {0}")]
    Unknown(String),
}

impl SendError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::Timeout { .. } => "E_TIMEOUT",
            Self::Protocol(_) => "E_PROTOCOL",
            Self::Unknown(_) => "E_UNKNOWN",
        }
    }
}

// =============================================================================
// REQUEST / REPLY
// =============================================================================

/// JSON body of the outbound POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub message: String,
}

/// Reply body returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerReply {
    pub status: String,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerReply {
    pub const SUCCESS: &'static str = "success";

    /// Consume the reply, yielding the bot text on success.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Protocol`] when `status` is not `"success"` or
    /// `response` is missing or empty. The server's `message` is carried as
    /// the detail when present.
    pub fn into_text(self) -> Result<String, SendError> {
        if self.status == Self::SUCCESS {
            if let Some(text) = self.response.filter(|r| !r.is_empty()) {
                return Ok(text);
            }
        }
        let detail = self
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("status {:?} without a response", self.status));
        Err(SendError::Protocol(detail))
    }
}
