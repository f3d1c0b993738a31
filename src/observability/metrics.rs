//! Client metrics.
//!
//! # Metrics
//! - `session_client_requests_total` (counter): completed requests by method, status
//! - `session_client_request_duration_seconds` (histogram): round-trip latency
//! - `session_client_token_updates_total` (counter): accepted tokens, by whether the host changed
//! - `session_client_errors_total` (counter): failed calls by error kind

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};

pub const REQUESTS_TOTAL: &str = "session_client_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "session_client_request_duration_seconds";
pub const TOKEN_UPDATES_TOTAL: &str = "session_client_token_updates_total";
pub const ERRORS_TOTAL: &str = "session_client_errors_total";

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!(REQUESTS_TOTAL, "Requests completed by the session client");
    describe_histogram!(
        REQUEST_DURATION_SECONDS,
        metrics::Unit::Seconds,
        "Round-trip latency of session client requests"
    );
    describe_counter!(TOKEN_UPDATES_TOTAL, "Session tokens accepted from responses");
    describe_counter!(ERRORS_TOTAL, "Session client calls that failed");
}

/// Record a completed round trip.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        REQUESTS_TOTAL,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(REQUEST_DURATION_SECONDS, "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record an accepted session token.
pub fn record_token_update(host_changed: bool) {
    counter!(TOKEN_UPDATES_TOTAL, "host_changed" => host_changed.to_string()).increment(1);
}

/// Record a failed call.
pub fn record_error(kind: &'static str) {
    counter!(ERRORS_TOTAL, "kind" => kind).increment(1);
}
