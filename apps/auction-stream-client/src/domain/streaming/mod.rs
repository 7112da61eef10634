//! Streaming Domain Types
//!
//! Transport-neutral vocabulary for supervised subscriptions:
//!
//! - [`StreamKind`]: which server push a session consumes
//! - [`StreamError`]: classified stream failures (transient, cancelled, fatal)
//! - [`RetryPolicy`] / [`RetryDecision`]: linear backoff with a fixed ceiling
//! - [`SessionEvent`] / [`SessionOutcome`]: what the driver observes

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::domain::credential::AuthError;

/// Default number of reconnect attempts before a session fails.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default backoff unit; the delay before attempt `n` is `n` units.
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

// =============================================================================
// Stream Kind
// =============================================================================

/// Server-streaming subscriptions offered by the auction API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// Auction state transitions.
    AuctionStatus,
    /// Order reasonability check results.
    ReasonabilityResults,
}

impl StreamKind {
    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuctionStatus => "auction_status",
            Self::ReasonabilityResults => "reasonability_results",
        }
    }

    /// Human-readable description of the updates carried by the stream.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuctionStatus => "Auction status updates",
            Self::ReasonabilityResults => "Reasonability check results updates",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Stream Errors
// =============================================================================

/// Classification of a stream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Server or network temporarily unavailable; retried with backoff.
    Unavailable,
    /// Caller-initiated cancellation; the session stops cleanly.
    Cancelled,
    /// Anything else; the session fails without retrying.
    Other,
}

/// Errors surfaced by a streaming subscription.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The stream is temporarily unavailable (also used for credential failures
    /// while connecting).
    #[error("stream unavailable: {detail}")]
    Transient {
        /// Detail reported by the transport.
        detail: String,
    },

    /// The call was cancelled by the caller.
    #[error("stream cancelled")]
    Cancelled,

    /// Terminal failure reported by the transport.
    #[error("stream failed ({code}): {detail}")]
    Fatal {
        /// Transport status code name.
        code: String,
        /// Detail reported by the transport.
        detail: String,
    },

    /// The retry ceiling was reached while the stream stayed unavailable.
    #[error("reconnect attempts exhausted after {attempts} retries: {detail}")]
    RetriesExhausted {
        /// Number of retries performed.
        attempts: u32,
        /// Detail of the last failure.
        detail: String,
    },
}

impl StreamError {
    /// Create a transient error.
    #[must_use]
    pub fn transient(detail: impl Into<String>) -> Self {
        Self::Transient {
            detail: detail.into(),
        }
    }

    /// Create a fatal error.
    #[must_use]
    pub fn fatal(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Fatal {
            code: code.into(),
            detail: detail.into(),
        }
    }

    /// Classify this failure for the retry state machine.
    #[must_use]
    pub const fn class(&self) -> FailureClass {
        match self {
            Self::Transient { .. } => FailureClass::Unavailable,
            Self::Cancelled => FailureClass::Cancelled,
            Self::Fatal { .. } | Self::RetriesExhausted { .. } => FailureClass::Other,
        }
    }

    /// Status code label as shown to the user.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Transient { .. } => "Unavailable",
            Self::Cancelled => "Cancelled",
            Self::Fatal { code, .. } => code,
            Self::RetriesExhausted { .. } => "Unavailable",
        }
    }

    /// Transport detail without the classification prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Transient { detail }
            | Self::Fatal { detail, .. }
            | Self::RetriesExhausted { detail, .. } => detail,
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<AuthError> for StreamError {
    fn from(error: AuthError) -> Self {
        Self::transient(format!("credential acquisition failed: {error}"))
    }
}

// =============================================================================
// Retry Policy
// =============================================================================

/// Decision taken after a stream failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Reconnect after the given delay.
    RetryAfter(Duration),
    /// Stop retrying and fail the session.
    GiveUp(StreamError),
    /// Stop the session without an error.
    StopClean,
}

/// Linear backoff with a fixed retry ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum reconnect attempts before giving up.
    pub max_retries: u32,
    /// Delay unit; attempt `n` waits `n * backoff_base`.
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with custom values.
    #[must_use]
    pub const fn new(max_retries: u32, backoff_base: Duration) -> Self {
        Self {
            max_retries,
            backoff_base,
        }
    }

    /// Delay before the given 1-based attempt.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff_base.saturating_mul(attempt)
    }

    /// Decide what to do after `failure`, where `attempt` is the already
    /// incremented retry counter.
    #[must_use]
    pub fn decide(&self, attempt: u32, failure: &StreamError) -> RetryDecision {
        match failure.class() {
            FailureClass::Cancelled => RetryDecision::StopClean,
            FailureClass::Other => RetryDecision::GiveUp(failure.clone()),
            FailureClass::Unavailable if attempt <= self.max_retries => {
                RetryDecision::RetryAfter(self.delay_for_attempt(attempt))
            }
            FailureClass::Unavailable => RetryDecision::GiveUp(StreamError::RetriesExhausted {
                attempts: attempt.saturating_sub(1),
                detail: failure.detail().to_string(),
            }),
        }
    }
}

// =============================================================================
// Session Events & Outcome
// =============================================================================

/// Notifications delivered to the driver, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent<T> {
    /// First item received since (re)connecting.
    Listening,
    /// A payload from the stream.
    Item(T),
    /// A transient failure is being retried.
    Reconnecting {
        /// 1-based reconnect attempt.
        attempt: u32,
        /// Status code label of the failure.
        code: String,
        /// Delay before the attempt.
        delay: Duration,
    },
    /// The session stopped cleanly.
    Disconnected,
    /// The session failed.
    Failed(StreamError),
}

/// Why a session stopped cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The caller cancelled the session.
    Cancelled,
    /// The server ended the stream.
    Completed,
}

/// Terminal state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Clean termination.
    Stopped(StopReason),
    /// Terminal failure, including retry exhaustion.
    Failed(StreamError),
}

impl SessionOutcome {
    /// Check if the session ended without an error.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        matches!(self, Self::Stopped(_))
    }

    /// Label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped(StopReason::Cancelled) => "cancelled",
            Self::Stopped(StopReason::Completed) => "completed",
            Self::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_policy_values() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.backoff_base, Duration::from_secs(1));
    }

    #[test_case(1, 1_000 ; "first attempt")]
    #[test_case(2, 2_000 ; "second attempt")]
    #[test_case(5, 5_000 ; "last attempt")]
    fn backoff_is_linear(attempt: u32, expected_ms: u64) {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.decide(attempt, &StreamError::transient("down")),
            RetryDecision::RetryAfter(Duration::from_millis(expected_ms))
        );
    }

    #[test]
    fn gives_up_past_ceiling() {
        let policy = RetryPolicy::default();
        let decision = policy.decide(6, &StreamError::transient("connection refused"));
        assert_eq!(
            decision,
            RetryDecision::GiveUp(StreamError::RetriesExhausted {
                attempts: 5,
                detail: "connection refused".to_string(),
            })
        );
    }

    #[test]
    fn cancelled_stops_clean() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.decide(1, &StreamError::Cancelled),
            RetryDecision::StopClean
        );
    }

    #[test]
    fn other_failures_give_up_immediately() {
        let policy = RetryPolicy::default();
        let error = StreamError::fatal("PermissionDenied", "no access");
        assert_eq!(policy.decide(1, &error), RetryDecision::GiveUp(error));
    }

    #[test]
    fn auth_errors_count_as_transient() {
        let error = StreamError::from(AuthError::MissingToken);
        assert_eq!(error.class(), FailureClass::Unavailable);
        assert!(error.detail().contains("no access token"));
    }

    #[test]
    fn stream_kind_labels() {
        assert_eq!(StreamKind::AuctionStatus.to_string(), "auction_status");
        assert_eq!(
            StreamKind::ReasonabilityResults.description(),
            "Reasonability check results updates"
        );
    }
}
