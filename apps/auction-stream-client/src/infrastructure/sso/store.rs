//! Single-flight credential cache.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::client::SsoClient;
use crate::application::ports::TokenProviderPort;
use crate::domain::credential::{AuthError, Credential};
use crate::infrastructure::metrics;

/// Caches the current credential and refreshes it on demand.
///
/// The lock is held across the acquisition call, so callers arriving during a
/// refresh wait for it and then see the new credential. A failed refresh
/// leaves the cached value untouched.
#[derive(Debug)]
pub struct CredentialStore {
    client: SsoClient,
    cached: Mutex<Option<Credential>>,
}

impl CredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(client: SsoClient) -> Self {
        Self {
            client,
            cached: Mutex::new(None),
        }
    }

    /// Seed the store with an existing credential.
    #[must_use]
    pub fn with_credential(self, credential: Credential) -> Self {
        Self {
            cached: Mutex::new(Some(credential)),
            ..self
        }
    }

    /// Snapshot of the cached credential.
    pub async fn cached(&self) -> Option<Credential> {
        self.cached.lock().await.clone()
    }
}

#[async_trait]
impl TokenProviderPort for CredentialStore {
    async fn get_token(&self) -> Result<String, AuthError> {
        let mut cached = self.cached.lock().await;

        if let Some(credential) = cached.as_ref().filter(|c| c.is_valid()) {
            return Ok(credential.token().to_string());
        }

        let credential = match self.client.request_token().await {
            Ok(credential) => credential,
            Err(e) => {
                tracing::warn!(error = %e, "SSO token refresh failed");
                metrics::record_token_refresh_failure(failure_reason(&e));
                return Err(e);
            }
        };

        metrics::record_token_refresh();
        tracing::debug!(expires_at = %credential.expires_at(), "Cached new SSO token");
        let token = credential.token().to_string();
        *cached = Some(credential);
        drop(cached);
        Ok(token)
    }
}

const fn failure_reason(error: &AuthError) -> &'static str {
    match error {
        AuthError::Transport(_) => "transport",
        AuthError::Rejected { .. } => "rejected",
        AuthError::InvalidResponse(_) => "invalid_response",
        AuthError::MissingToken => "missing_token",
    }
}
