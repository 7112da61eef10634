//! Stream source adapters over the notification client.

use async_trait::async_trait;
use futures::StreamExt;

use super::client::AuctionStreamClient;
use super::proto::auction::v1::{AuctionStatusResponse, ReasonabilityResultsResponse};
use crate::application::ports::{ItemStream, StreamSourcePort};
use crate::domain::streaming::{StreamError, StreamKind};

/// Source of auction status updates.
#[derive(Debug, Clone)]
pub struct AuctionStatusSource {
    client: AuctionStreamClient,
}

impl AuctionStatusSource {
    /// Create a source over `client`.
    #[must_use]
    pub const fn new(client: AuctionStreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StreamSourcePort for AuctionStatusSource {
    type Item = AuctionStatusResponse;

    fn kind(&self) -> StreamKind {
        StreamKind::AuctionStatus
    }

    async fn open(&self) -> Result<ItemStream<Self::Item>, StreamError> {
        let stream = self.client.open_auction_status().await?;
        Ok(stream.map(|item| item.map_err(StreamError::from)).boxed())
    }
}

/// Source of reasonability check results.
#[derive(Debug, Clone)]
pub struct ReasonabilityResultsSource {
    client: AuctionStreamClient,
}

impl ReasonabilityResultsSource {
    /// Create a source over `client`.
    #[must_use]
    pub const fn new(client: AuctionStreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StreamSourcePort for ReasonabilityResultsSource {
    type Item = ReasonabilityResultsResponse;

    fn kind(&self) -> StreamKind {
        StreamKind::ReasonabilityResults
    }

    async fn open(&self) -> Result<ItemStream<Self::Item>, StreamError> {
        let stream = self.client.open_reasonability_results().await?;
        Ok(stream.map(|item| item.map_err(StreamError::from)).boxed())
    }
}
