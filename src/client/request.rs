//! Outbound request descriptor.
//!
//! # Responsibilities
//! - Carry method, path, headers, body and timeout before a host is known
//! - Produce a `reqwest::Request` once the client has resolved the URL
//!
//! # Design Decisions
//! - Path only; scheme and host come from the client's routing target
//! - Body is a raw `reqwest::Body` (bytes or stream), never re-encoded
//! - Timeout is passed through to the transport untouched

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Body, Method, Request, Url};

/// A request waiting for the session client to pick its target host.
#[derive(Debug)]
pub struct SessionRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Body>,
    timeout: Option<Duration>,
}

impl SessionRequest {
    /// Create a request for `path` (e.g. `/api/items?page=2`).
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Set a header, replacing any previous value.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merge a set of headers, replacing previous values for the same names.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Attach a raw body.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Per-request timeout enforced by the transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retarget the request at another path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers_ref(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn into_request(self, url: Url) -> Request {
        let mut request = Request::new(self.method, url);
        *request.headers_mut() = self.headers;
        *request.body_mut() = self.body;
        *request.timeout_mut() = self.timeout;
        request
    }
}
