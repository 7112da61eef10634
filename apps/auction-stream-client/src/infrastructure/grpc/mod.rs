//! gRPC Notification Streams (Driven Adapter)
//!
//! Tonic client for the `AuctionNotifier` and `ReasonabilityResultsNotifier`
//! services, the [`StreamSourcePort`](crate::application::ports::StreamSourcePort)
//! adapters over them, and the [`AuctionStreams`] facade the driver uses.

mod client;
mod config;
mod error;
mod events;
mod sources;
mod streams;

pub use client::AuctionStreamClient;
pub use config::AuctionStreamClientConfig;
pub use error::GrpcClientError;
pub use events::StreamEvent;
pub use sources::{AuctionStatusSource, ReasonabilityResultsSource};
pub use streams::AuctionStreams;

/// Include generated protobuf code.
#[allow(
    dead_code,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
pub mod proto {
    pub mod auction {
        pub mod v1 {
            include!("../../../../../packages/schema-gen/rust/auction/v1/auction.v1.rs");
        }
    }
}
