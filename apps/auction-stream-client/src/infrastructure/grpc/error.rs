//! gRPC error types and status classification.

use thiserror::Error;
use tonic::Code;

use crate::domain::streaming::StreamError;

/// Errors while setting up the gRPC client.
#[derive(Error, Debug)]
pub enum GrpcClientError {
    /// Transport error while building the channel.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Error message describing the configuration issue.
        message: String,
    },
}

impl From<tonic::Status> for StreamError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            Code::Unavailable => Self::transient(status.message()),
            Code::Cancelled => Self::Cancelled,
            code => Self::fatal(format!("{code:?}"), status.message()),
        }
    }
}
