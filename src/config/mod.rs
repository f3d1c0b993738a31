//! Client configuration.
//!
//! # Data Flow
//! ```text
//! host application config (TOML table or struct literal)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientOptions (validated, immutable)
//!     → SessionClient::new / SessionClient::with_transport
//! ```
//!
//! # Design Decisions
//! - Options are immutable once the client is built
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The transport is not part of the serializable options; it is handed to
//!   the client separately so callers can share one pool across clients

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_options, ConfigError};
pub use schema::{ClientOptions, DEFAULT_SCHEME, DEFAULT_TOKEN_HEADER_NAME};
pub use validation::{validate_options, ValidationError};
