//! Prometheus Metrics Module
//!
//! Counters and gauges for token refreshes and stream sessions, recorded
//! through the `metrics` facade. Without an installed exporter every
//! recording call is a no-op.
//!
//! # Metrics Categories
//!
//! - **Credentials**: Token acquisitions and failures
//! - **Streams**: Items received, reconnect attempts, session outcomes
//!
//! # Integration
//!
//! When `METRICS_PORT` is non-zero, [`init_metrics`] serves `/metrics` on that
//! port.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::OnceLock;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::domain::streaming::StreamKind;

static INSTALLED: OnceLock<u16> = OnceLock::new();

/// Install the Prometheus exporter with an HTTP listener on `port`.
///
/// Subsequent calls are no-ops. Must run inside a Tokio runtime.
///
/// # Errors
///
/// Returns an error if the recorder or the listener cannot be installed.
pub fn init_metrics(port: u16) -> Result<(), BuildError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    PrometheusBuilder::new()
        .with_http_listener(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
        .install()?;

    let _ = INSTALLED.set(port);
    register_metrics();
    tracing::info!(port, "Prometheus exporter listening");
    Ok(())
}

/// Port of the installed exporter, if any.
#[must_use]
pub fn metrics_port() -> Option<u16> {
    INSTALLED.get().copied()
}

// =============================================================================
// Metric Registration
// =============================================================================

fn register_metrics() {
    describe_counter!(
        "auction_client_token_refreshes_total",
        "Total SSO token acquisitions"
    );
    describe_counter!(
        "auction_client_token_refresh_failures_total",
        "Total failed SSO token acquisitions"
    );
    describe_counter!(
        "auction_client_stream_items_total",
        "Total items received per stream kind"
    );
    describe_counter!(
        "auction_client_stream_reconnects_total",
        "Total stream reconnect attempts"
    );
    describe_counter!(
        "auction_client_stream_sessions_total",
        "Terminated stream sessions by outcome"
    );
    describe_gauge!(
        "auction_client_stream_active",
        "Whether a session of the stream kind is running"
    );
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Record a successful token acquisition.
pub fn record_token_refresh() {
    counter!("auction_client_token_refreshes_total").increment(1);
}

/// Record a failed token acquisition.
pub fn record_token_refresh_failure(reason: &'static str) {
    counter!(
        "auction_client_token_refresh_failures_total",
        "reason" => reason
    )
    .increment(1);
}

/// Record an item received from a stream.
pub fn record_stream_item(kind: StreamKind) {
    counter!(
        "auction_client_stream_items_total",
        "kind" => kind.as_str()
    )
    .increment(1);
}

/// Record a reconnect attempt.
pub fn record_reconnect(kind: StreamKind) {
    counter!(
        "auction_client_stream_reconnects_total",
        "kind" => kind.as_str()
    )
    .increment(1);
}

/// Record a terminated session.
pub fn record_session_outcome(kind: StreamKind, outcome: &'static str) {
    counter!(
        "auction_client_stream_sessions_total",
        "kind" => kind.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Update the running-session gauge of a stream kind.
pub fn set_active_sessions(kind: StreamKind, value: f64) {
    gauge!(
        "auction_client_stream_active",
        "kind" => kind.as_str()
    )
    .set(value);
}

// =============================================================================
// Tests
// =============================================================================
