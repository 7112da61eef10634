//! SSO Token Acquisition
//!
//! - [`SsoClient`]: password-grant call against `{sso}/connect/token`
//! - [`CredentialStore`]: single-flight cache in front of the client, the
//!   process-wide [`TokenProviderPort`](crate::application::ports::TokenProviderPort)

mod client;
mod store;

pub use client::{SsoClient, SsoConfig, basic_auth_header};
pub use store::CredentialStore;
