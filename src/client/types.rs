//! Client error definitions.

use thiserror::Error;

/// Errors that can occur while building or using a session client.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid or missing construction options; the client is never created.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The scheme, host and path do not form a valid URL; nothing was sent.
    #[error("Invalid URL '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Network or transport failure, propagated verbatim.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 200 OK response carried a token header that could not be decoded.
    #[error("Invalid session token header: {0}")]
    TokenDecode(#[source] serde_json::Error),

    /// A caller-supplied header value is not valid; nothing was sent.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// The held token cannot be carried in a header value; nothing was sent.
    #[error("Session token cannot be encoded: {0}")]
    TokenEncode(String),
}

impl SessionError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::Configuration(_) => "configuration",
            SessionError::Url { .. } => "url",
            SessionError::Transport(_) => "transport",
            SessionError::TokenDecode(_) => "token_decode",
            SessionError::InvalidHeader(_) => "header",
            SessionError::TokenEncode(_) => "token_encode",
        }
    }
}

/// Result type for session client operations.
pub type SessionResult<T> = Result<T, SessionError>;
