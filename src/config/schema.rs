//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::session::SessionToken;

/// Header used to exchange the session token when none is configured.
pub const DEFAULT_TOKEN_HEADER_NAME: &str = "X-ErmesSessionToken";

/// Scheme used when a client is seeded from a token without an explicit scheme.
pub const DEFAULT_SCHEME: &str = "https";

/// Construction options for a [`SessionClient`](crate::client::SessionClient).
///
/// Exactly one of `initial_origin` or `initial_token` is expected. When both
/// are set the token wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Header used both to send and receive the token.
    /// Empty means [`DEFAULT_TOKEN_HEADER_NAME`].
    pub token_header_name: String,

    /// URL scheme for token-seeded clients. Empty means [`DEFAULT_SCHEME`].
    ///
    /// Ignored when the client is seeded from `initial_origin`: the scheme
    /// always comes from the parsed origin in that case.
    pub scheme: String,

    /// Origin URL (e.g. `https://host.example:8443`) used before any token.
    ///
    /// The host keeps any port written here, including a default one.
    pub initial_origin: String,

    /// Token to seed the client with.
    pub initial_token: Option<SessionToken>,
}

impl ClientOptions {
    /// Options seeded from an origin URL.
    pub fn from_origin(origin: impl Into<String>) -> Self {
        Self {
            initial_origin: origin.into(),
            ..Self::default()
        }
    }

    /// Options seeded from a previously issued token.
    pub fn from_token(token: SessionToken) -> Self {
        Self {
            initial_token: Some(token),
            ..Self::default()
        }
    }

    /// Parse and validate options from a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, crate::config::ConfigError> {
        crate::config::load_options(content)
    }

    /// Effective token header name.
    pub fn effective_token_header_name(&self) -> &str {
        if self.token_header_name.is_empty() {
            DEFAULT_TOKEN_HEADER_NAME
        } else {
            &self.token_header_name
        }
    }

    /// Effective scheme for a token-seeded client.
    pub fn effective_scheme(&self) -> &str {
        if self.scheme.is_empty() {
            DEFAULT_SCHEME
        } else {
            &self.scheme
        }
    }
}

/// Split an origin URL into `(scheme, host[:port])`.
///
/// A port written in the origin is kept even when it is the scheme default,
/// so `https://host.example:443` yields `host.example:443`.
pub(crate) fn parse_origin(origin: &str) -> Result<(String, String), String> {
    let url = Url::parse(origin).map_err(|e| e.to_string())?;
    let host = url
        .host_str()
        .ok_or_else(|| "origin has no host".to_string())?;
    let port = match url.port() {
        Some(port) => Some(port),
        None if has_explicit_port(origin) => url.port_or_known_default(),
        None => None,
    };
    let host = match port {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    Ok((url.scheme().to_string(), host))
}

// Authority of the raw origin text ends in `:<digits>`.
fn has_explicit_port(origin: &str) -> bool {
    let rest = origin.split_once("://").map_or(origin, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let authority = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    match authority.rsplit_once(':') {
        Some((_, port)) => !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
