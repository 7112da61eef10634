//! Port Interfaces
//!
//! Contracts between the application services and the infrastructure
//! adapters, following the Hexagonal Architecture pattern.
//!
//! ## Driven Ports (Outbound)
//!
//! - `TokenProviderPort`: Yields a currently valid bearer token
//! - `StreamSourcePort`: Opens one server-streaming subscription

mod stream_source_port;
mod token_provider_port;

pub use stream_source_port::{ItemStream, StreamSourcePort};
#[cfg(test)]
pub use token_provider_port::MockTokenProviderPort;
pub use token_provider_port::TokenProviderPort;
