#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Auction Stream Client - Authenticated Streaming Consumer
//!
//! Keeps long-lived auction notification streams alive across transient
//! failures while every outbound call (gRPC streams and the REST API) carries
//! a cached SSO bearer token.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Credentials, stream vocabulary, REST payloads
//!   - `credential`: Bearer credential and the password-grant request
//!   - `streaming`: Stream kinds, failure classes, the retry policy
//!   - `auction`: Auction API payloads
//!
//! - **Application**: Ports and the generic stream supervisor
//!   - `ports`: Token provider, stream source
//!   - `services`: `StreamSupervisor`, `SubscriptionHandle`
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `sso`: Token endpoint client, single-flight credential store
//!   - `auth`: Bearer injection for reqwest and tonic
//!   - `grpc`: Notification stream client and sources
//!   - `rest`: Auction REST API client
//!   - `config`, `telemetry`, `metrics`
//!
//! # Data Flow
//!
//! ```text
//! driver ── start(kind) ──► StreamSupervisor ── open() ──► StreamSource
//!    ▲                            │                          │
//!    └──── SessionEvent ◄─────────┘               AuthInjector ──► CredentialStore ──► SSO
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Core types with no transport dependencies.
pub mod domain;

/// Application layer - Ports and the stream supervisor.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::credential::{AuthError, Credential, CredentialRequest};
pub use domain::streaming::{
    FailureClass, RetryDecision, RetryPolicy, SessionEvent, SessionOutcome, StopReason,
    StreamError, StreamKind,
};

// Application
pub use application::ports::{ItemStream, StreamSourcePort, TokenProviderPort};
pub use application::services::{StreamSupervisor, SubscriptionHandle};

// Infrastructure
pub use infrastructure::auth::AuthInjector;
pub use infrastructure::config::{ClientConfig, ConfigError};
pub use infrastructure::grpc::{
    AuctionStreamClient, AuctionStreamClientConfig, AuctionStreams, StreamEvent,
    proto::auction::v1 as proto,
};
pub use infrastructure::rest::{AuctionApiClient, AuctionApiError};
pub use infrastructure::sso::{CredentialStore, SsoClient, SsoConfig};

// Observability
pub use infrastructure::metrics::init_metrics;
pub use infrastructure::telemetry::{TelemetryConfig, TelemetryGuard, init as init_telemetry};
