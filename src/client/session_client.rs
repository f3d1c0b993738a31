//! Session routing client.
//!
//! # Responsibilities
//! - Hold the routing target (initial host or session token)
//! - Resolve `scheme://host/path` freshly for every request
//! - Attach the held token to outgoing requests
//! - Capture refreshed tokens from `200 OK` responses and switch hosts
//!
//! # Design Decisions
//! - Routing target lives in an `ArcSwap`: one snapshot per request for
//!   reads, one atomic store for writes; in-flight requests never block
//! - Last successful token decode wins, by completion order
//! - A malformed token on a 200 response fails the call and leaves the
//!   routing target untouched

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwap;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Body, Method, Response, StatusCode, Url};

use crate::client::request::SessionRequest;
use crate::client::transport::Transport;
use crate::client::types::{SessionError, SessionResult};
use crate::config::schema::ClientOptions;
use crate::config::validation::{resolve_options, ResolvedOptions};
use crate::observability::metrics;
use crate::session::{RoutingTarget, SessionToken};

/// HTTP client that follows a server-issued session token across hosts.
pub struct SessionClient<T = reqwest::Client> {
    transport: T,
    scheme: String,
    token_header: HeaderName,
    target: ArcSwap<RoutingTarget>,
}

impl SessionClient<reqwest::Client> {
    /// Build a client backed by a fresh `reqwest::Client`.
    pub fn new(options: ClientOptions) -> SessionResult<Self> {
        Self::with_transport(reqwest::Client::new(), options)
    }

    /// Build a client that starts at `origin` (e.g. `https://host.example`).
    pub fn with_origin(origin: impl Into<String>) -> SessionResult<Self> {
        Self::new(ClientOptions::from_origin(origin))
    }

    /// Build a client that resumes an existing session over https.
    pub fn with_token(token: SessionToken) -> SessionResult<Self> {
        Self::new(ClientOptions::from_token(token))
    }
}

impl<T: Transport> SessionClient<T> {
    /// Build a client on top of an existing transport.
    ///
    /// When seeded from `initial_origin`, the scheme comes from the parsed
    /// origin and `options.scheme` is ignored.
    pub fn with_transport(transport: T, options: ClientOptions) -> SessionResult<Self> {
        let ResolvedOptions {
            token_header,
            scheme,
            target,
        } = resolve_options(&options).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            SessionError::Configuration(message)
        })?;

        tracing::debug!(
            scheme = %scheme,
            host = %target.host(),
            has_token = target.token().is_some(),
            token_header = %token_header,
            "Session client initialized"
        );

        Ok(Self {
            transport,
            scheme,
            token_header,
            target: ArcSwap::from_pointee(target),
        })
    }

    /// Host the next request will address.
    pub fn host(&self) -> String {
        self.target.load().host().to_string()
    }

    /// Currently held token, if the server has issued one.
    pub fn token(&self) -> Option<SessionToken> {
        self.target.load().token().cloned()
    }

    /// Consistent snapshot of the routing target.
    pub fn routing_target(&self) -> Arc<RoutingTarget> {
        self.target.load_full()
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn token_header_name(&self) -> &HeaderName {
        &self.token_header
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `scheme://host/path` against the current routing target.
    pub fn string_url(&self, path: &str) -> String {
        format_url(&self.scheme, self.target.load().host(), path)
    }

    /// Parsed URL for `path` against the current routing target.
    pub fn url(&self, path: &str) -> SessionResult<Url> {
        resolve_url(&self.scheme, self.target.load().host(), path)
    }

    /// Start building a request for `path`.
    pub fn request(&self, method: Method, path: impl Into<String>) -> SessionRequest {
        SessionRequest::new(method, path)
    }

    pub async fn get(&self, path: &str) -> SessionResult<Response> {
        self.execute(SessionRequest::new(Method::GET, path)).await
    }

    pub async fn head(&self, path: &str) -> SessionResult<Response> {
        self.execute(SessionRequest::new(Method::HEAD, path)).await
    }

    /// POST a raw body with the given content type.
    pub async fn post(
        &self,
        path: &str,
        content_type: &str,
        body: impl Into<Body>,
    ) -> SessionResult<Response> {
        let content_type = HeaderValue::from_str(content_type)
            .map_err(|e| SessionError::InvalidHeader(format!("content type: {}", e)))?;
        let request = SessionRequest::new(Method::POST, path)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.execute(request).await
    }

    /// Send a prepared request to `path`, replacing whatever path it had.
    pub async fn send(&self, path: &str, request: SessionRequest) -> SessionResult<Response> {
        self.execute(request.with_path(path)).await
    }

    /// Resolve, decorate, dispatch and intercept a single request.
    ///
    /// Non-200 responses are returned as-is. A 200 response whose token
    /// header fails to decode is dropped and surfaces as
    /// [`SessionError::TokenDecode`].
    pub async fn execute(&self, request: SessionRequest) -> SessionResult<Response> {
        let result = self.dispatch(request).await;
        if let Err(ref e) = result {
            metrics::record_error(e.kind());
        }
        result
    }

    async fn dispatch(&self, request: SessionRequest) -> SessionResult<Response> {
        let start = Instant::now();
        let target = self.target.load_full();

        let url = resolve_url(&self.scheme, target.host(), request.path())?;
        let mut outbound = request.into_request(url);

        if let Some(token) = target.token() {
            outbound
                .headers_mut()
                .insert(self.token_header.clone(), encode_header(token)?);
        }

        let method = outbound.method().clone();
        tracing::debug!(
            method = %method,
            url = %outbound.url(),
            has_token = target.token().is_some(),
            "Dispatching request"
        );

        let response = self.transport.execute(outbound).await.map_err(|e| {
            tracing::warn!(method = %method, error = %e, "Transport error");
            SessionError::Transport(e)
        })?;

        let status = response.status();
        metrics::record_request(method.as_str(), status.as_u16(), start);
        tracing::debug!(method = %method, status = status.as_u16(), "Response received");

        self.intercept(response)
    }

    fn intercept(&self, response: Response) -> SessionResult<Response> {
        if response.status() != StatusCode::OK {
            return Ok(response);
        }

        let token = match response.headers().get(&self.token_header) {
            Some(value) if !value.is_empty() => {
                Some(SessionToken::decode(value.as_bytes()).map_err(|e| {
                    tracing::warn!(
                        header = %self.token_header,
                        error = %e,
                        "Discarding response with malformed session token"
                    );
                    SessionError::TokenDecode(e)
                })?)
            }
            _ => None,
        };

        if let Some(token) = token {
            self.update_target(token);
        }
        Ok(response)
    }

    fn update_target(&self, token: SessionToken) {
        let host = token.host.clone();
        let previous = self.target.swap(Arc::new(RoutingTarget::Token(token)));
        let host_changed = previous.host() != host;

        if host_changed {
            tracing::info!(from = %previous.host(), to = %host, "Session routed to new host");
        } else {
            tracing::debug!(host = %host, "Session token refreshed");
        }
        metrics::record_token_update(host_changed);
    }
}

impl<T> fmt::Debug for SessionClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionClient")
            .field("scheme", &self.scheme)
            .field("token_header", &self.token_header)
            .field("target", &self.target.load_full())
            .finish_non_exhaustive()
    }
}

fn format_url(scheme: &str, host: &str, path: &str) -> String {
    format!("{}://{}{}", scheme, host, path)
}

/// Parse `scheme://host/path`, refusing hosts that would shift the authority.
///
/// An empty host or one carrying `/ \ ? # @` would otherwise let the path
/// (or a userinfo prefix) be read as the host.
fn resolve_url(scheme: &str, host: &str, path: &str) -> SessionResult<Url> {
    let url = format_url(scheme, host, path);
    if host.is_empty() {
        return Err(SessionError::Url {
            url,
            source: url::ParseError::EmptyHost,
        });
    }
    if host.contains(['/', '\\', '?', '#', '@']) {
        return Err(SessionError::Url {
            url,
            source: url::ParseError::InvalidDomainCharacter,
        });
    }
    Url::parse(&url).map_err(|source| SessionError::Url { url, source })
}

fn encode_header(token: &SessionToken) -> SessionResult<HeaderValue> {
    let encoded = token
        .encode()
        .map_err(|e| SessionError::TokenEncode(e.to_string()))?;
    HeaderValue::from_bytes(encoded.as_bytes()).map_err(|e| SessionError::TokenEncode(e.to_string()))
}
