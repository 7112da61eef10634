//! Application Layer - Use cases and port definitions.
//!
//! This layer holds the port interfaces the infrastructure adapters implement
//! and the stream supervisor that drives any [`ports::StreamSourcePort`].

/// Port interfaces for token acquisition and stream sources.
pub mod ports;

/// Application services (stream supervision).
pub mod services;
