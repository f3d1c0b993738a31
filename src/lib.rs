//! Session-affinity HTTP client.
//!
//! Issues HTTP requests against a backend that pins each client session to
//! a host and may move it at any time. The server hands out a session token
//! (`{"sessionId":"...","host":"..."}`) in a response header; the client
//! sends it back on every request and follows the host it names.
//!
//! ```no_run
//! use ermes_client::SessionClient;
//!
//! # async fn run() -> Result<(), ermes_client::SessionError> {
//! let client = SessionClient::with_origin("https://edge.example")?;
//! let response = client.get("/api/session").await?;
//! println!("{} via {}", response.status(), client.host());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod observability;
pub mod session;

pub use client::{SessionClient, SessionError, SessionRequest, SessionResult, Transport};
pub use config::{ClientOptions, DEFAULT_TOKEN_HEADER_NAME};
pub use session::{RoutingTarget, SessionToken};
