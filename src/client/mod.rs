//! Session-affinity HTTP client.
//!
//! # Data Flow
//! ```text
//! SessionRequest (method, path, headers, body)
//!     → session_client.rs (snapshot routing target, resolve URL)
//!     → decorate (token header, if a token is held)
//!     → transport.rs (reqwest::Client or any shared Transport)
//!     → intercept (200 OK + token header → new routing target)
//!     → reqwest::Response back to the caller
//! ```
//!
//! # Design Decisions
//! - No retries; transport errors propagate unchanged
//! - Non-200 responses are returned, never turned into errors
//! - Only the routing-state reads and writes are synchronized, not whole requests

pub mod request;
pub mod session_client;
pub mod transport;
pub mod types;

pub use request::SessionRequest;
pub use session_client::SessionClient;
pub use transport::Transport;
pub use types::{SessionError, SessionResult};
