//! Configuration for the notification stream client.

use std::time::Duration;

/// Settings for the gRPC channel.
///
/// No request timeout is applied; a subscription stays open until either side
/// ends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionStreamClientConfig {
    /// Server endpoint (e.g., `https://auctions-grpc.example.com`).
    pub endpoint: String,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// TCP keepalive interval.
    pub tcp_keepalive: Duration,

    /// HTTP/2 keepalive interval.
    pub http2_keepalive_interval: Duration,

    /// Keepalive timeout.
    pub keepalive_timeout: Duration,
}

impl Default for AuctionStreamClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5001".to_string(),
            connect_timeout: Duration::from_secs(10),
            tcp_keepalive: Duration::from_secs(60),
            http2_keepalive_interval: Duration::from_secs(30),
            keepalive_timeout: Duration::from_secs(20),
        }
    }
}

impl AuctionStreamClientConfig {
    /// Create a configuration with the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Whether the endpoint requires TLS.
    #[must_use]
    pub fn use_tls(&self) -> bool {
        self.endpoint
            .get(..8)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tls_follows_scheme() {
        assert!(AuctionStreamClientConfig::new("https://grpc.example.com").use_tls());
        assert!(AuctionStreamClientConfig::new("HTTPS://grpc.example.com").use_tls());
        assert!(!AuctionStreamClientConfig::new("http://localhost:5001").use_tls());
    }

    #[test]
    fn builder_keeps_endpoint() {
        let config = AuctionStreamClientConfig::new("http://localhost:6000")
            .with_connect_timeout(Duration::from_secs(2));
        assert_eq!(config.endpoint, "http://localhost:6000");
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }
}
