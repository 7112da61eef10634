//! SSO token endpoint client.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::domain::credential::{AuthError, Credential, CredentialRequest, PASSWORD_GRANT_TYPE};

/// Token endpoint path relative to the SSO base URL.
const TOKEN_PATH: &str = "/connect/token";

/// SSO endpoint configuration.
#[derive(Debug, Clone)]
pub struct SsoConfig {
    /// SSO base URL.
    pub url: String,
    /// Password-grant parameters.
    pub request: CredentialRequest,
    /// Network timeout of a single acquisition call.
    pub timeout: Duration,
}

impl SsoConfig {
    /// Create a configuration with a 30 second timeout.
    #[must_use]
    pub fn new(url: impl Into<String>, request: CredentialRequest) -> Self {
        Self {
            url: url.into(),
            request,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the acquisition timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full token endpoint URL.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}{TOKEN_PATH}", self.url.trim_end_matches('/'))
    }
}

/// `Authorization` value for HTTP Basic authentication.
#[must_use]
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default, alias = "accessToken")]
    access_token: Option<String>,
    #[serde(default, alias = "expiresIn")]
    expires_in: i64,
}

/// Client for the SSO token endpoint.
#[derive(Debug, Clone)]
pub struct SsoClient {
    http: reqwest::Client,
    config: SsoConfig,
}

impl SsoClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: SsoConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SsoConfig {
        &self.config
    }

    /// Acquire a new credential with the password grant.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a body
    /// without an access token.
    pub async fn request_token(&self) -> Result<Credential, AuthError> {
        let request = &self.config.request;
        let url = self.config.token_url();
        tracing::debug!(url = %url, client_id = request.client_id(), "Requesting SSO token");

        let response = self
            .http
            .post(&url)
            .header(
                AUTHORIZATION,
                basic_auth_header(request.client_id(), request.client_secret()),
            )
            .form(&[
                ("grant_type", PASSWORD_GRANT_TYPE),
                ("username", request.username()),
                ("password", request.password()),
                ("scope", request.scope()),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        let token = body
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let credential = Credential::from_expires_in(token, body.expires_in).ok_or_else(|| {
            AuthError::InvalidResponse(format!("expires_in out of range: {}", body.expires_in))
        })?;

        tracing::info!(expires_in = body.expires_in, "Acquired SSO token");
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_header_encodes_client_credentials() {
        assert_eq!(
            basic_auth_header("client", "secret"),
            "Basic Y2xpZW50OnNlY3JldA=="
        );
    }

    #[test]
    fn token_url_joins_path() {
        let request = CredentialRequest::new("c", "s", "u", "p");
        let config = SsoConfig::new("https://sso.example.com/", request);
        assert_eq!(config.token_url(), "https://sso.example.com/connect/token");
    }

    #[test]
    fn token_response_accepts_both_casings() {
        let snake: TokenResponse =
            serde_json::from_str(r#"{"access_token":"a","expires_in":3600}"#).unwrap();
        let camel: TokenResponse =
            serde_json::from_str(r#"{"accessToken":"b","expiresIn":60}"#).unwrap();
        assert_eq!(snake.access_token.as_deref(), Some("a"));
        assert_eq!(snake.expires_in, 3600);
        assert_eq!(camel.access_token.as_deref(), Some("b"));
        assert_eq!(camel.expires_in, 60);
    }
}
