//! Bearer Credentials
//!
//! A [`Credential`] is the access token issued by the SSO service together with
//! its absolute expiry. It is valid while `now <= expires_at`; an empty token
//! or a zero lifetime is never valid, so such a credential always forces a
//! refresh on the next lookup.
//!
//! A [`CredentialRequest`] holds the password-grant parameters used to acquire
//! a new credential. Its `Debug` implementation redacts every secret.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Scope requested for auction API access tokens.
pub const AUCTION_SCOPE: &str = "auction_api";

/// OAuth grant type used for token acquisition.
pub const PASSWORD_GRANT_TYPE: &str = "password";

// =============================================================================
// Credential
// =============================================================================

/// An issued bearer token and its expiry.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential issued at `issued_at` with the server-reported lifetime.
    ///
    /// Returns `None` if the expiry is not representable.
    #[must_use]
    pub fn issued(
        token: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(lifetime)?;
        Some(Self {
            token: token.into(),
            issued_at,
            expires_at,
        })
    }

    /// Create a credential issued now, expiring after `expires_in_secs` seconds.
    ///
    /// Returns `None` if the lifetime is out of range.
    #[must_use]
    pub fn from_expires_in(token: impl Into<String>, expires_in_secs: i64) -> Option<Self> {
        Self::issued(token, Utc::now(), Duration::try_seconds(expires_in_secs)?)
    }

    /// The bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Absolute expiry instant.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Check validity at the given instant.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.token.is_empty() && self.expires_at > self.issued_at && now <= self.expires_at
    }

    /// Check validity now.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// =============================================================================
// Credential Request
// =============================================================================

/// Password-grant parameters for the SSO token endpoint.
#[derive(Clone)]
pub struct CredentialRequest {
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
    scope: String,
}

impl CredentialRequest {
    /// Create a request for the default auction API scope.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
            scope: AUCTION_SCOPE.to_string(),
        }
    }

    /// Override the requested scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// OAuth client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Account username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Requested scope.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl std::fmt::Debug for CredentialRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRequest")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("scope", &self.scope)
            .finish()
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Failures while acquiring a credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token endpoint could not be reached.
    #[error("token request failed: {0}")]
    Transport(String),

    /// The token endpoint answered with a non-success status.
    #[error("token endpoint rejected the request ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The response body could not be parsed.
    #[error("invalid token response: {0}")]
    InvalidResponse(String),

    /// The response carried no access token.
    #[error("token response has no access token")]
    MissingToken,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn valid_until_expiry_inclusive() {
        let credential = Credential::issued("token", at(1_000), Duration::seconds(60)).unwrap();
        assert!(credential.is_valid_at(at(1_000)));
        assert!(credential.is_valid_at(at(1_060)));
        assert!(!credential.is_valid_at(at(1_061)));
    }

    #[test]
    fn empty_token_is_never_valid() {
        let credential = Credential::issued("", at(1_000), Duration::seconds(3_600)).unwrap();
        assert!(!credential.is_valid_at(at(1_000)));
    }

    #[test]
    fn zero_lifetime_requires_refresh() {
        let credential = Credential::issued("token", at(1_000), Duration::zero()).unwrap();
        assert!(!credential.is_valid_at(at(1_000)));

        let credential = Credential::from_expires_in("token", 0).unwrap();
        assert!(!credential.is_valid());
    }

    #[test]
    fn unrepresentable_lifetime_is_rejected() {
        assert!(Credential::from_expires_in("token", 9_000_000_000_000).is_none());
        assert!(Credential::from_expires_in("token", -9_000_000_000_000).is_none());
        assert!(Credential::from_expires_in("token", i64::MAX).is_none());
        assert!(Credential::from_expires_in("token", i64::MIN).is_none());
        let latest = DateTime::<Utc>::MAX_UTC;
        assert!(Credential::issued("token", latest, Duration::seconds(1)).is_none());
    }

    #[test]
    fn debug_redacts_secrets() {
        let request = CredentialRequest::new("client", "s3cret", "trader", "hunter2");
        let debug = format!("{request:?}");
        assert!(debug.contains("client"));
        assert!(debug.contains("trader"));
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("hunter2"));

        let credential = Credential::from_expires_in("abc.def.ghi", 60).unwrap();
        assert!(!format!("{credential:?}").contains("abc.def.ghi"));
    }

    #[test]
    fn default_scope_is_auction_api() {
        let request = CredentialRequest::new("c", "s", "u", "p");
        assert_eq!(request.scope(), AUCTION_SCOPE);
        assert_eq!(request.with_scope("other").scope(), "other");
    }

    proptest! {
        #[test]
        fn validity_matches_expiry_window(
            issued in 0i64..1_000_000,
            lifetime in 1i64..100_000,
            offset in -10i64..200_000,
        ) {
            let credential =
                Credential::issued("token", at(issued), Duration::seconds(lifetime)).unwrap();
            let now = at(issued + offset);
            prop_assert_eq!(credential.is_valid_at(now), issued + offset <= issued + lifetime);
        }
    }
}
