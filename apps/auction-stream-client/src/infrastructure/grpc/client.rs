//! Notification stream gRPC client.

use tonic::codec::Streaming;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use super::config::AuctionStreamClientConfig;
use super::error::GrpcClientError;
use super::proto::auction::v1::{
    AuctionStatusResponse, ReasonabilityResultsResponse,
    auction_notifier_client::AuctionNotifierClient,
    reasonability_results_notifier_client::ReasonabilityResultsNotifierClient,
};
use crate::domain::streaming::StreamError;
use crate::infrastructure::auth::AuthInjector;

/// Client for the auction notification services.
///
/// The channel connects lazily; every `open_*` call fetches a token through
/// the [`AuthInjector`] and issues a new server-streaming call.
#[derive(Debug, Clone)]
pub struct AuctionStreamClient {
    channel: Channel,
    auth: AuthInjector,
    config: AuctionStreamClientConfig,
}

impl AuctionStreamClient {
    /// Connect lazily (connection established on first call).
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint configuration is invalid.
    pub fn connect_lazy(
        config: &AuctionStreamClientConfig,
        auth: AuthInjector,
    ) -> Result<Self, GrpcClientError> {
        let endpoint = Self::create_endpoint(config)?;
        let channel = endpoint.connect_lazy();

        tracing::debug!(endpoint = %config.endpoint, "Created lazy channel to auction notifier");

        Ok(Self {
            channel,
            auth,
            config: config.clone(),
        })
    }

    /// Create a configured endpoint from the config.
    fn create_endpoint(config: &AuctionStreamClientConfig) -> Result<Endpoint, GrpcClientError> {
        let mut endpoint = Channel::from_shared(config.endpoint.clone())
            .map_err(|e| GrpcClientError::InvalidConfig {
                message: format!("invalid endpoint: {e}"),
            })?
            .connect_timeout(config.connect_timeout)
            .tcp_keepalive(Some(config.tcp_keepalive))
            .http2_keep_alive_interval(config.http2_keepalive_interval)
            .keep_alive_timeout(config.keepalive_timeout)
            .keep_alive_while_idle(true)
            .tcp_nodelay(true);

        if config.use_tls() {
            endpoint = endpoint.tls_config(ClientTlsConfig::new().with_native_roots())?;
        }

        Ok(endpoint)
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &AuctionStreamClientConfig {
        &self.config
    }

    /// Open the auction status stream.
    ///
    /// # Errors
    ///
    /// Credential failures are transient; call failures are classified by
    /// their gRPC status.
    pub async fn open_auction_status(
        &self,
    ) -> Result<Streaming<AuctionStatusResponse>, StreamError> {
        let request = self.auth.authorize_grpc(()).await?;
        let response = AuctionNotifierClient::new(self.channel.clone())
            .get_auction_status_stream(request)
            .await?;
        Ok(response.into_inner())
    }

    /// Open the reasonability results stream.
    ///
    /// # Errors
    ///
    /// Credential failures are transient; call failures are classified by
    /// their gRPC status.
    pub async fn open_reasonability_results(
        &self,
    ) -> Result<Streaming<ReasonabilityResultsResponse>, StreamError> {
        let request = self.auth.authorize_grpc(()).await?;
        let response = ReasonabilityResultsNotifierClient::new(self.channel.clone())
            .get_reasonability_results_stream(request)
            .await?;
        Ok(response.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockTokenProviderPort;
    use std::sync::Arc;

    fn injector() -> AuthInjector {
        AuthInjector::new(Arc::new(MockTokenProviderPort::new()))
    }

    #[tokio::test]
    async fn rejects_invalid_endpoint() {
        let config = AuctionStreamClientConfig::new("not a uri");
        let err = AuctionStreamClient::connect_lazy(&config, injector()).unwrap_err();
        assert!(matches!(err, GrpcClientError::InvalidConfig { .. }));
    }

    #[tokio::test]
    async fn lazy_connect_does_not_dial() {
        let config = AuctionStreamClientConfig::new("http://127.0.0.1:1");
        let client = AuctionStreamClient::connect_lazy(&config, injector()).unwrap();
        assert_eq!(client.config().endpoint, "http://127.0.0.1:1");
    }
}
