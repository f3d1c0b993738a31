//! Session routing state.
//!
//! # Data Flow
//! ```text
//! construction (origin or token)
//!     → target.rs (RoutingTarget::InitialHost | RoutingTarget::Token)
//!
//! 200 OK response with token header
//!     → token.rs (decode compact JSON)
//!     → RoutingTarget::Token (replaces previous target)
//! ```
//!
//! # Design Decisions
//! - Host and token live in one enum so a snapshot is always consistent
//! - Transition is Initial → Token once, then Token → Token indefinitely
//! - Token contents are opaque; no validation beyond the two required fields

pub mod target;
pub mod token;

pub use target::RoutingTarget;
pub use token::SessionToken;
