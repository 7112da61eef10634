//! Token Provider Port (Driven Port)
//!
//! Interface for obtaining a bearer token that is valid at the time of the call.

use async_trait::async_trait;

use crate::domain::credential::AuthError;

/// Port for bearer token lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenProviderPort: Send + Sync {
    /// Return a token valid now, acquiring a fresh one when the cached
    /// credential is missing or expired.
    async fn get_token(&self) -> Result<String, AuthError>;
}
