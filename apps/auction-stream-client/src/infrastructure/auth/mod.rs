//! Bearer Token Injection
//!
//! One capability ("attach a fresh bearer token before the call is issued")
//! adapted to both transports: a reqwest `RequestBuilder` for the REST API
//! and a tonic `Request` for the notification streams. Streaming calls are
//! authorized once, when the call is established.

use std::sync::Arc;

use tonic::metadata::{Ascii, MetadataValue};

use crate::application::ports::TokenProviderPort;
use crate::domain::credential::AuthError;

/// gRPC metadata key carrying the bearer token.
pub const AUTHORIZATION_METADATA_KEY: &str = "authorization";

/// Attaches bearer tokens from a [`TokenProviderPort`] to outbound calls.
#[derive(Clone)]
pub struct AuthInjector {
    tokens: Arc<dyn TokenProviderPort>,
}

impl std::fmt::Debug for AuthInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInjector").finish_non_exhaustive()
    }
}

impl AuthInjector {
    /// Create an injector backed by `tokens`.
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenProviderPort>) -> Self {
        Self { tokens }
    }

    /// `Authorization` value for the current token.
    ///
    /// # Errors
    ///
    /// Returns the token provider's error.
    pub async fn bearer_value(&self) -> Result<String, AuthError> {
        let token = self.tokens.get_token().await?;
        Ok(format!("Bearer {token}"))
    }

    /// Add the bearer header to an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns the token provider's error; the request is not sent.
    pub async fn authorize_http(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let token = self.tokens.get_token().await?;
        Ok(request.bearer_auth(token))
    }

    /// Wrap a gRPC message in a request carrying the bearer metadata.
    ///
    /// # Errors
    ///
    /// Returns the token provider's error, or `InvalidResponse` if the token
    /// is not a valid metadata value.
    pub async fn authorize_grpc<T>(&self, message: T) -> Result<tonic::Request<T>, AuthError> {
        let value: MetadataValue<Ascii> = self
            .bearer_value()
            .await?
            .parse()
            .map_err(|_| AuthError::InvalidResponse("token is not valid metadata".to_string()))?;

        let mut request = tonic::Request::new(message);
        request
            .metadata_mut()
            .insert(AUTHORIZATION_METADATA_KEY, value);
        Ok(request)
    }
}
