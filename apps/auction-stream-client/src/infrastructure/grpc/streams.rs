//! Driver-facing facade over both notification streams.

use std::sync::Arc;

use super::client::AuctionStreamClient;
use super::events::StreamEvent;
use super::proto::auction::v1::{AuctionStatusResponse, ReasonabilityResultsResponse};
use super::sources::{AuctionStatusSource, ReasonabilityResultsSource};
use crate::application::services::{StreamSupervisor, SubscriptionHandle};
use crate::domain::streaming::{RetryPolicy, StreamKind};

/// Starts supervised subscriptions by kind.
#[derive(Debug, Clone)]
pub struct AuctionStreams {
    client: AuctionStreamClient,
    policy: RetryPolicy,
}

impl AuctionStreams {
    /// Create the facade.
    #[must_use]
    pub const fn new(client: AuctionStreamClient, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Start a fresh session of `kind`. Must be called inside a Tokio runtime.
    #[must_use]
    pub fn start(&self, kind: StreamKind) -> SubscriptionHandle<StreamEvent> {
        match kind {
            StreamKind::AuctionStatus => StreamSupervisor::new(
                Arc::new(AuctionStatusSource::new(self.client.clone())),
                |response: AuctionStatusResponse| {
                    response.auction_status.map(StreamEvent::AuctionStatus)
                },
                self.policy,
            )
            .start(),
            StreamKind::ReasonabilityResults => StreamSupervisor::new(
                Arc::new(ReasonabilityResultsSource::new(self.client.clone())),
                |response: ReasonabilityResultsResponse| {
                    response
                        .reasonability_results_info
                        .map(StreamEvent::ReasonabilityResults)
                },
                self.policy,
            )
            .start(),
        }
    }
}
