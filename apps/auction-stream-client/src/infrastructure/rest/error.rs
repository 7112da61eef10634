//! REST API error types.

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::credential::AuthError;

/// Errors returned by the auction REST API client.
#[derive(Error, Debug)]
pub enum AuctionApiError {
    /// No bearer token could be obtained; nothing was sent.
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Network or decoding failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{message} (status {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message; for `400` it carries the server's message.
        message: String,
    },
}

impl AuctionApiError {
    /// Build an API error from a non-success response.
    ///
    /// For `400 Bad Request` the JSON body's `message` (or `Message`) field is
    /// appended to the "Request failed:" prefix.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let detail = if status == StatusCode::BAD_REQUEST {
            serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .or_else(|| value.get("Message"))
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_default()
        } else {
            String::new()
        };

        Self::Api {
            status: status.as_u16(),
            message: format!("Request failed: {detail}"),
        }
    }

    /// HTTP status of an API error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Auth(_) | Self::Http(_) => None,
        }
    }
}
