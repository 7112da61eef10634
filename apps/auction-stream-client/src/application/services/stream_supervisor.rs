//! Stream Supervisor
//!
//! Drives a [`StreamSourcePort`] through the session state machine:
//!
//! ```text
//! Connecting -> Listening -> (Retrying -> Connecting)* -> Stopped | Failed
//! ```
//!
//! The retry counter and the "announced" flag live inside the consume loop of
//! a single task; the driver only sees the ordered event channel and the
//! cancellation token. Cancellation is observed while opening the stream,
//! while waiting for the next item and while sleeping in backoff.

use std::future::Future;
use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::application::ports::StreamSourcePort;
use crate::domain::streaming::{
    RetryDecision, RetryPolicy, SessionEvent, SessionOutcome, StopReason, StreamError, StreamKind,
};
use crate::infrastructure::metrics;

/// Maps a raw stream item to the payload forwarded to the driver.
///
/// Items mapped to `None` are consumed (they still reset the retry counter)
/// but not forwarded.
pub type PayloadExtractor<I, P> = Arc<dyn Fn(I) -> Option<P> + Send + Sync>;

// =============================================================================
// Subscription Handle
// =============================================================================

/// Driver-side handle of a running stream session.
pub struct SubscriptionHandle<P> {
    kind: StreamKind,
    events: mpsc::UnboundedReceiver<SessionEvent<P>>,
    cancel: CancellationToken,
    task: JoinHandle<SessionOutcome>,
}

impl<P> std::fmt::Debug for SubscriptionHandle<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("kind", &self.kind)
            .field("cancelled", &self.cancel.is_cancelled())
            .field("finished", &self.task.is_finished())
            .finish_non_exhaustive()
    }
}

impl<P> SubscriptionHandle<P> {
    /// Which subscription this handle controls.
    #[must_use]
    pub const fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check if the consume loop has terminated.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Next event of the session, or `None` once the session has terminated
    /// and every event has been delivered.
    pub async fn next_event(&mut self) -> Option<SessionEvent<P>> {
        self.events.recv().await
    }

    /// Wait for the consume loop to terminate.
    ///
    /// A loop that panicked is reported as a fatal `Internal` failure.
    pub async fn join(self) -> SessionOutcome {
        self.finish().await.0
    }

    /// Join the loop; the error is returned separately when it died without
    /// emitting its terminal event.
    async fn finish(self) -> (SessionOutcome, Option<StreamError>) {
        match self.task.await {
            Ok(outcome) => (outcome, None),
            Err(e) => {
                let error = StreamError::fatal("Internal", e.to_string());
                tracing::error!(kind = %self.kind, error = %error, "Stream session aborted");
                metrics::set_active_sessions(self.kind, 0.0);
                metrics::record_session_outcome(self.kind, "failed");
                (SessionOutcome::Failed(error.clone()), Some(error))
            }
        }
    }

    /// Deliver events to `on_event` until the session ends on its own or
    /// `stop` resolves, whichever comes first.
    ///
    /// When `stop` wins, the session is cancelled and the remaining events
    /// (at least the final `Disconnected`) are still delivered before the
    /// loop is joined. If the loop panicked, `on_event` receives a final
    /// `Failed`.
    pub async fn run_until<F>(
        mut self,
        stop: F,
        mut on_event: impl FnMut(SessionEvent<P>),
    ) -> SessionOutcome
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(stop);
        let mut stop_fired = false;

        loop {
            tokio::select! {
                () = &mut stop, if !stop_fired => {
                    stop_fired = true;
                    tracing::debug!(kind = %self.kind, "Stop requested by driver");
                    self.cancel.cancel();
                }
                event = self.events.recv() => match event {
                    Some(event) => on_event(event),
                    None => break,
                },
            }
        }

        let (outcome, aborted) = self.finish().await;
        if let Some(error) = aborted {
            on_event(SessionEvent::Failed(error));
        }
        outcome
    }
}

// =============================================================================
// Stream Supervisor
// =============================================================================

/// Generic supervisor for one logical subscription.
pub struct StreamSupervisor<S: StreamSourcePort, P> {
    source: Arc<S>,
    extract: PayloadExtractor<S::Item, P>,
    policy: RetryPolicy,
}

impl<S: StreamSourcePort, P> std::fmt::Debug for StreamSupervisor<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSupervisor")
            .field("kind", &self.source.kind())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<S, P> StreamSupervisor<S, P>
where
    S: StreamSourcePort,
    P: Send + 'static,
{
    /// Create a supervisor over `source`.
    pub fn new(
        source: Arc<S>,
        extract: impl Fn(S::Item) -> Option<P> + Send + Sync + 'static,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            source,
            extract: Arc::new(extract),
            policy,
        }
    }

    /// Spawn the consume loop and return the driver's handle.
    #[must_use]
    pub fn start(self) -> SubscriptionHandle<P> {
        let kind = self.source.kind();
        let cancel = CancellationToken::new();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let span = tracing::info_span!("stream_session", kind = %kind);
        let task_cancel = cancel.clone();
        let task = tokio::spawn(
            async move { self.run(&events_tx, &task_cancel).await }.instrument(span),
        );

        SubscriptionHandle {
            kind,
            events: events_rx,
            cancel,
            task,
        }
    }

    /// Run the session until it stops or fails, emitting events in order.
    pub async fn run(
        &self,
        events: &mpsc::UnboundedSender<SessionEvent<P>>,
        cancel: &CancellationToken,
    ) -> SessionOutcome {
        let kind = self.source.kind();
        let mut attempt: u32 = 0;
        let mut announced = false;

        tracing::info!(kind = %kind, "Stream session started");
        metrics::set_active_sessions(kind, 1.0);

        let outcome = loop {
            let failure = match self
                .connect_and_consume(events, cancel, &mut attempt, &mut announced)
                .await
            {
                Ok(reason) => break SessionOutcome::Stopped(reason),
                Err(failure) => failure,
            };

            attempt = attempt.saturating_add(1);
            match self.policy.decide(attempt, &failure) {
                RetryDecision::StopClean => break SessionOutcome::Stopped(StopReason::Cancelled),
                RetryDecision::GiveUp(error) => {
                    tracing::warn!(kind = %kind, error = %error, "Stream session giving up");
                    break SessionOutcome::Failed(error);
                }
                RetryDecision::RetryAfter(delay) => {
                    announced = false;
                    tracing::info!(
                        kind = %kind,
                        attempt,
                        delay_ms = delay.as_millis(),
                        error = %failure,
                        "Reconnecting stream"
                    );
                    metrics::record_reconnect(kind);
                    let _ = events.send(SessionEvent::Reconnecting {
                        attempt,
                        code: failure.code().to_string(),
                        delay,
                    });

                    tokio::select! {
                        () = cancel.cancelled() => {
                            tracing::info!(kind = %kind, "Stream cancelled during reconnect delay");
                            break SessionOutcome::Stopped(StopReason::Cancelled);
                        }
                        () = tokio::time::sleep(delay) => {}
                    }
                }
            }
        };

        match &outcome {
            SessionOutcome::Stopped(reason) => {
                tracing::info!(kind = %kind, reason = ?reason, "Stream session stopped");
                let _ = events.send(SessionEvent::Disconnected);
            }
            SessionOutcome::Failed(error) => {
                tracing::error!(kind = %kind, error = %error, "Stream session failed");
                let _ = events.send(SessionEvent::Failed(error.clone()));
            }
        }
        metrics::set_active_sessions(kind, 0.0);
        metrics::record_session_outcome(kind, outcome.as_str());

        outcome
    }

    /// Open one stream and consume it until it ends, fails, or is cancelled.
    async fn connect_and_consume(
        &self,
        events: &mpsc::UnboundedSender<SessionEvent<P>>,
        cancel: &CancellationToken,
        attempt: &mut u32,
        announced: &mut bool,
    ) -> Result<StopReason, StreamError> {
        let kind = self.source.kind();
        tracing::debug!(kind = %kind, "Connecting to stream");

        let mut stream = tokio::select! {
            biased;
            () = cancel.cancelled() => return Ok(StopReason::Cancelled),
            opened = self.source.open() => opened?,
        };

        loop {
            let next = tokio::select! {
                biased;
                () = cancel.cancelled() => return Ok(StopReason::Cancelled),
                next = stream.next() => next,
            };

            match next {
                None => {
                    tracing::info!(kind = %kind, "Server ended the stream");
                    return Ok(StopReason::Completed);
                }
                Some(Err(error)) => return Err(error),
                Some(Ok(item)) => {
                    *attempt = 0;
                    metrics::record_stream_item(kind);
                    if !*announced {
                        *announced = true;
                        let _ = events.send(SessionEvent::Listening);
                    }
                    if let Some(payload) = (self.extract)(item) {
                        let _ = events.send(SessionEvent::Item(payload));
                    }
                }
            }
        }
    }
}
