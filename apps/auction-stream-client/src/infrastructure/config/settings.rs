//! Client Configuration Settings
//!
//! Loaded from environment variables (a `.env` file is read by the binary
//! before this runs).
//!
//! # Required
//!
//! - `AUCTION_API_URL`: REST API base URL
//! - `AUCTION_GRPC_URL`: gRPC endpoint of the notification streams
//! - `SSO_URL`: SSO base URL (token endpoint is `{SSO_URL}/connect/token`)
//! - `SSO_CLIENT_ID`, `SSO_CLIENT_SECRET`: OAuth client credentials
//! - `SSO_USERNAME`, `SSO_PASSWORD`: Account credentials
//!
//! # Optional
//!
//! - `SSO_SCOPE` (default `auction_api`)
//! - `SSO_TIMEOUT_SECS` (default 30)
//! - `STREAM_MAX_RETRIES` (default 5)
//! - `STREAM_BACKOFF_BASE_MS` (default 1000)
//! - `METRICS_PORT` (default 0, exporter disabled)

use std::time::Duration;

use crate::domain::credential::{AUCTION_SCOPE, CredentialRequest};
use crate::domain::streaming::{DEFAULT_BACKOFF_BASE, DEFAULT_MAX_RETRIES, RetryPolicy};
use crate::infrastructure::grpc::AuctionStreamClientConfig;
use crate::infrastructure::sso::SsoConfig;

/// Complete client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST API base URL.
    pub api_url: String,
    /// gRPC stream client settings.
    pub grpc: AuctionStreamClientConfig,
    /// SSO token endpoint settings and credentials.
    pub sso: SsoConfig,
    /// Reconnect policy for stream sessions.
    pub retry: RetryPolicy,
    /// Prometheus exporter port; 0 disables the exporter.
    pub metrics_port: u16,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing or empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &str| -> Result<String, ConfigError> {
            let value = lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))?;
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue(key.to_string()));
            }
            Ok(value)
        };

        let api_url = required("AUCTION_API_URL")?;
        let grpc_url = required("AUCTION_GRPC_URL")?;
        let sso_url = required("SSO_URL")?;
        let client_id = required("SSO_CLIENT_ID")?;
        let client_secret = required("SSO_CLIENT_SECRET")?;
        let username = required("SSO_USERNAME")?;
        let password = required("SSO_PASSWORD")?;

        let scope = lookup("SSO_SCOPE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| AUCTION_SCOPE.to_string());
        let request =
            CredentialRequest::new(client_id, client_secret, username, password).with_scope(scope);

        let sso = SsoConfig::new(sso_url, request).with_timeout(parse_or(
            &lookup,
            "SSO_TIMEOUT_SECS",
            Duration::from_secs(30),
            |v| v.parse::<u64>().ok().map(Duration::from_secs),
        ));

        let retry = RetryPolicy::new(
            parse_or(&lookup, "STREAM_MAX_RETRIES", DEFAULT_MAX_RETRIES, |v| {
                v.parse().ok()
            }),
            parse_or(&lookup, "STREAM_BACKOFF_BASE_MS", DEFAULT_BACKOFF_BASE, |v| {
                v.parse::<u64>().ok().map(Duration::from_millis)
            }),
        );

        let metrics_port = parse_or(&lookup, "METRICS_PORT", 0, |v| v.parse().ok());

        Ok(Self {
            api_url,
            grpc: AuctionStreamClientConfig::new(grpc_url),
            sso,
            retry,
            metrics_port,
        })
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl FnOnce(&str) -> Option<T>,
) -> T {
    lookup(key).and_then(|v| parse(v.trim())).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, String> {
        [
            ("AUCTION_API_URL", "https://auctions.example.com/api/v1"),
            ("AUCTION_GRPC_URL", "https://auctions-grpc.example.com"),
            ("SSO_URL", "https://sso.example.com"),
            ("SSO_CLIENT_ID", "client"),
            ("SSO_CLIENT_SECRET", "secret"),
            ("SSO_USERNAME", "trader"),
            ("SSO_PASSWORD", "hunter2"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<ClientConfig, ConfigError> {
        ClientConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn loads_required_with_defaults() {
        let config = load(&base_env()).unwrap();
        assert_eq!(config.api_url, "https://auctions.example.com/api/v1");
        assert_eq!(config.grpc.endpoint, "https://auctions-grpc.example.com");
        assert_eq!(config.sso.token_url(), "https://sso.example.com/connect/token");
        assert_eq!(config.sso.request.scope(), AUCTION_SCOPE);
        assert_eq!(config.sso.timeout, Duration::from_secs(30));
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.metrics_port, 0);
    }

    #[test]
    fn missing_required_variable() {
        let mut env = base_env();
        env.remove("SSO_PASSWORD");
        assert_eq!(
            load(&env).unwrap_err(),
            ConfigError::MissingEnvVar("SSO_PASSWORD".to_string())
        );
    }

    #[test]
    fn empty_required_variable() {
        let mut env = base_env();
        env.insert("SSO_CLIENT_ID", "  ".to_string());
        assert_eq!(
            load(&env).unwrap_err(),
            ConfigError::EmptyValue("SSO_CLIENT_ID".to_string())
        );
    }

    #[test]
    fn optional_overrides_and_fallbacks() {
        let mut env = base_env();
        env.insert("STREAM_MAX_RETRIES", "3".to_string());
        env.insert("STREAM_BACKOFF_BASE_MS", "250".to_string());
        env.insert("METRICS_PORT", "not-a-port".to_string());
        env.insert("SSO_SCOPE", "auction_api offline_access".to_string());

        let config = load(&env).unwrap();
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.retry.backoff_base, Duration::from_millis(250));
        assert_eq!(config.metrics_port, 0);
        assert_eq!(config.sso.request.scope(), "auction_api offline_access");
    }

    #[test]
    fn debug_does_not_leak_password() {
        let config = load(&base_env()).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
