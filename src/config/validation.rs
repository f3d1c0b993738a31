//! Configuration validation.
//!
//! # Responsibilities
//! - Require an initial origin or an initial token
//! - Check the origin parses into a scheme and host
//! - Check scheme and header name syntax
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientOptions → Result<(), Vec<ValidationError>>
//! - A scheme override is only checked when it is actually used (token-seeded)

use reqwest::header::HeaderName;
use thiserror::Error;

use crate::config::schema::{parse_origin, ClientOptions};
use crate::session::RoutingTarget;

/// A single semantic problem with [`ClientOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither an origin nor a token was supplied.
    #[error("either initial origin or initial token must be set")]
    MissingTarget,

    /// The origin could not be parsed into a scheme and host.
    #[error("invalid initial origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    /// The scheme override is not a valid URL scheme.
    #[error("invalid scheme '{0}'")]
    InvalidScheme(String),

    /// The token header name is not a valid HTTP header name.
    #[error("invalid token header name '{0}'")]
    InvalidHeaderName(String),
}

/// Options checked and resolved into what a client is built from.
#[derive(Debug)]
pub(crate) struct ResolvedOptions {
    pub token_header: HeaderName,
    pub scheme: String,
    pub target: RoutingTarget,
}

/// Validate options before a client is built from them.
pub fn validate_options(options: &ClientOptions) -> Result<(), Vec<ValidationError>> {
    resolve_options(options).map(|_| ())
}

/// Validate options and resolve the header name, scheme and routing target.
pub(crate) fn resolve_options(
    options: &ClientOptions,
) -> Result<ResolvedOptions, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let seed = match (&options.initial_token, options.initial_origin.is_empty()) {
        (Some(token), _) => {
            let scheme = options.effective_scheme();
            if is_valid_scheme(scheme) {
                Some((scheme.to_string(), RoutingTarget::Token(token.clone())))
            } else {
                errors.push(ValidationError::InvalidScheme(options.scheme.clone()));
                None
            }
        }
        (None, false) => match parse_origin(&options.initial_origin) {
            Ok((scheme, host)) => Some((scheme, RoutingTarget::InitialHost(host))),
            Err(reason) => {
                errors.push(ValidationError::InvalidOrigin {
                    origin: options.initial_origin.clone(),
                    reason,
                });
                None
            }
        },
        (None, true) => {
            errors.push(ValidationError::MissingTarget);
            None
        }
    };

    let token_header =
        match HeaderName::from_bytes(options.effective_token_header_name().as_bytes()) {
            Ok(name) => Some(name),
            Err(_) => {
                errors.push(ValidationError::InvalidHeaderName(
                    options.token_header_name.clone(),
                ));
                None
            }
        };

    match (seed, token_header) {
        (Some((scheme, target)), Some(token_header)) => Ok(ResolvedOptions {
            token_header,
            scheme,
            target,
        }),
        _ => Err(errors),
    }
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
