//! Infrastructure Layer - Adapters and external integrations.
//!
//! Concrete implementations of the ports defined in the application layer,
//! plus configuration and observability.

/// Bearer token injection for REST and gRPC calls.
pub mod auth;

/// Configuration loading.
pub mod config;

/// Tonic client and stream sources for the notification services.
pub mod grpc;

/// Prometheus metrics instrumentation.
pub mod metrics;

/// Auction REST API client.
pub mod rest;

/// SSO token endpoint client and the single-flight credential store.
pub mod sso;

/// Tracing subscriber and optional OpenTelemetry export.
pub mod telemetry;
