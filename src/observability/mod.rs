//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! SessionClient produces:
//!     → tracing events (structured fields: method, url, status, host)
//!     → metrics.rs (counters, histograms via the `metrics` facade)
//!
//! Consumers (installed by the host application):
//!     → any tracing subscriber
//!     → any metrics recorder (e.g. a Prometheus exporter)
//! ```
//!
//! # Design Decisions
//! - A library never installs a subscriber or recorder
//! - Without a recorder every metric call is a no-op

pub mod metrics;
