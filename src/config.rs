//! Widget configuration parsed from the mount element's `data-*` attributes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page owns every deployment-specific value (endpoint, CSRF cookie
//! name, canned replies). Parsing goes through a lookup closure so the same
//! code reads DOM attributes in the browser and plain maps in tests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;
pub const DEFAULT_TITLE: &str = "Chat";
pub const DEFAULT_GREETING: &str = "Hello! 👋 How can I help you today? You can ask me about:\n\
    • Product information\n\
    • Order tracking\n\
    • Farming questions\n\
    • General assistance";
pub const DEFAULT_QUICK_REPLIES: [&str; 4] =
    ["Track my order", "How do I track my order?", "Contact seller", "Product information"];

/// Errors produced while building a [`WidgetConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `data-endpoint` is absent or blank.
    #[error("missing chatbot endpoint: set data-endpoint on the mount element")]
    MissingEndpoint,

    /// An attribute is present but cannot be parsed.
    #[error("invalid value for data-{key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingEndpoint => "E_MISSING_ENDPOINT",
            Self::InvalidValue { .. } => "E_INVALID_VALUE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub request_timeout_ms: u32,
    pub title: String,
    pub greeting: String,
    pub quick_replies: Vec<String>,
    pub start_open: bool,
    pub debug: bool,
    pub stylesheet: Option<String>,
}

impl WidgetConfig {
    /// Config with every optional value at its default.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            title: DEFAULT_TITLE.to_owned(),
            greeting: DEFAULT_GREETING.to_owned(),
            quick_replies: DEFAULT_QUICK_REPLIES.iter().map(|s| (*s).to_owned()).collect(),
            start_open: false,
            debug: false,
            stylesheet: None,
        }
    }

    /// Build typed config from attribute lookups. `lookup` receives the key
    /// without the `data-` prefix.
    ///
    /// Required:
    /// - `endpoint`
    ///
    /// Optional:
    /// - `csrf-cookie`: default `csrftoken`
    /// - `csrf-header`: default `X-CSRFToken`
    /// - `timeout-ms`: default 30000, must be positive
    /// - `title`, `greeting`, `stylesheet`
    /// - `quick-replies`: `|`-separated; an empty value disables the row
    /// - `start-open`, `debug`: `true`/`false`/`1`/`0`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("endpoint")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;

        let mut config = Self::with_endpoint(endpoint);

        if let Some(v) = non_blank(lookup("csrf-cookie")) {
            config.csrf_cookie = v;
        }
        if let Some(v) = non_blank(lookup("csrf-header")) {
            config.csrf_header = v;
        }
        if let Some(raw) = lookup("timeout-ms") {
            config.request_timeout_ms = parse_timeout(&raw)?;
        }
        if let Some(v) = non_blank(lookup("title")) {
            config.title = v;
        }
        if let Some(v) = non_blank(lookup("greeting")) {
            config.greeting = v;
        }
        if let Some(raw) = lookup("quick-replies") {
            config.quick_replies = parse_quick_replies(&raw);
        }
        if let Some(raw) = lookup("start-open") {
            config.start_open = parse_bool("start-open", &raw)?;
        }
        if let Some(raw) = lookup("debug") {
            config.debug = parse_bool("debug", &raw)?;
        }
        config.stylesheet = non_blank(lookup("stylesheet"));

        Ok(config)
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_timeout(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidValue { key: "timeout-ms", value: raw.to_owned() }),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value: raw.to_owned() }),
    }
}

fn parse_quick_replies(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
