//! Transport seam.
//!
//! The client never owns connection handling; it hands a fully decorated
//! `reqwest::Request` to whatever executes it. `reqwest::Client` is the
//! default, and shared handles (`Arc<T>`, `&T`) work too, so one pool can
//! serve many session clients.

use std::future::Future;
use std::sync::Arc;

use reqwest::{Request, Response};

/// Executes a request and produces a response or a transport failure.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send;
}

impl Transport for reqwest::Client {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
        reqwest::Client::execute(self, request)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
        (**self).execute(request)
    }
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
        (**self).execute(request)
    }
}
