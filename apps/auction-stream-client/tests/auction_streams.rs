//! Notification stream sessions without a reachable SSO.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use auction_stream_client::{
    AuctionStreamClient, AuctionStreamClientConfig, AuctionStreams, AuthError, AuthInjector,
    RetryPolicy, SessionEvent, SessionOutcome, StopReason, StreamError, StreamKind,
    TokenProviderPort,
};

#[derive(Default)]
struct FailingTokens {
    calls: AtomicUsize,
}

#[async_trait]
impl TokenProviderPort for FailingTokens {
    async fn get_token(&self) -> Result<String, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AuthError::Rejected {
            status: 401,
            body: "invalid_client".to_string(),
        })
    }
}

fn streams(tokens: Arc<FailingTokens>, policy: RetryPolicy) -> AuctionStreams {
    let config = AuctionStreamClientConfig::new("http://127.0.0.1:1");
    let client = AuctionStreamClient::connect_lazy(&config, AuthInjector::new(tokens)).unwrap();
    AuctionStreams::new(client, policy)
}

#[tokio::test]
async fn credential_failures_exhaust_retries() {
    let tokens = Arc::new(FailingTokens::default());
    let streams = streams(Arc::clone(&tokens), RetryPolicy::new(5, Duration::from_millis(1)));

    let mut handle = streams.start(StreamKind::AuctionStatus);
    assert_eq!(handle.kind(), StreamKind::AuctionStatus);

    let mut attempts = Vec::new();
    let mut last = None;
    while let Some(event) = tokio::time::timeout(Duration::from_secs(5), handle.next_event())
        .await
        .expect("session did not terminate")
    {
        if let SessionEvent::Reconnecting { attempt, code, .. } = &event {
            assert_eq!(code, "Unavailable");
            attempts.push(*attempt);
        }
        last = Some(event);
    }

    assert_eq!(attempts, vec![1, 2, 3, 4, 5]);
    assert!(matches!(
        last,
        Some(SessionEvent::Failed(StreamError::RetriesExhausted { attempts: 5, .. }))
    ));
    assert!(matches!(
        handle.join().await,
        SessionOutcome::Failed(StreamError::RetriesExhausted { attempts: 5, .. })
    ));
    assert_eq!(tokens.calls.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn cancel_during_backoff_stops_cleanly() {
    let tokens = Arc::new(FailingTokens::default());
    let streams = streams(tokens, RetryPolicy::new(5, Duration::from_secs(30)));

    let handle = streams.start(StreamKind::ReasonabilityResults);
    let mut seen = Vec::new();
    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        handle.run_until(tokio::time::sleep(Duration::from_millis(50)), |event| {
            seen.push(event);
        }),
    )
    .await
    .expect("session did not stop");

    assert_eq!(outcome, SessionOutcome::Stopped(StopReason::Cancelled));
    assert!(matches!(
        seen.first(),
        Some(SessionEvent::Reconnecting { attempt: 1, .. })
    ));
    assert!(matches!(seen.last(), Some(SessionEvent::Disconnected)));
}
