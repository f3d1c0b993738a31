//! Routing target: the host a client addresses, with or without a token.

use crate::session::token::SessionToken;

/// Where the next request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingTarget {
    /// No token received yet; only the configured host is known.
    InitialHost(String),
    /// The server issued a token; its host is authoritative.
    Token(SessionToken),
}

impl RoutingTarget {
    /// Host of the active variant.
    pub fn host(&self) -> &str {
        match self {
            RoutingTarget::InitialHost(host) => host,
            RoutingTarget::Token(token) => &token.host,
        }
    }

    /// The held token, if any. Never synthesized from an initial host.
    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            RoutingTarget::InitialHost(_) => None,
            RoutingTarget::Token(token) => Some(token),
        }
    }
}

impl From<SessionToken> for RoutingTarget {
    fn from(token: SessionToken) -> Self {
        RoutingTarget::Token(token)
    }
}
