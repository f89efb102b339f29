//! Error Types

use thiserror::Error;

/// Problems with the embedded site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("display_cap must be at least 1")]
    InvalidDisplayCap,
    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
    #[error("share_url must be an http(s) URL, got '{0}'")]
    InvalidShareUrl(String),
}

/// Clipboard write failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClipboardError {
    #[error("clipboard is not available in this browser context")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
