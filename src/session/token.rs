//! Session token and its header encoding.

use serde::{Deserialize, Serialize};

/// A server-issued session identity pinned to a backend host.
///
/// On the wire the token is a compact JSON object:
/// `{"sessionId":"...","host":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken {
    /// Opaque session identifier, passed through unmodified.
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// Backend host (optionally with port) the session is pinned to.
    pub host: String,
}

impl SessionToken {
    /// Create a new token.
    pub fn new(session_id: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            host: host.into(),
        }
    }

    /// Encode the token in its compact header form.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a token from raw header bytes.
    ///
    /// Both fields are required; unknown fields are ignored.
    pub fn decode(raw: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw)
    }
}
