//! Auction Stream Client Binary
//!
//! Interactive console for the auction notification streams.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin auction-stream-client
//! ```
//!
//! Menu: `1` auction status stream, `2` reasonability results stream,
//! `3` auctions closing within 24 hours, `Q` quit. While a stream runs, press Enter to
//! disconnect.
//!
//! # Environment Variables
//!
//! See [`ClientConfig`] for the client settings. Logging goes to stderr and is
//! controlled by `RUST_LOG`; OpenTelemetry export by `OTEL_ENABLED`.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use auction_stream_client::infrastructure::telemetry;
use auction_stream_client::{
    AuctionApiClient, AuctionStreamClient, AuctionStreams, AuthInjector, ClientConfig,
    CredentialStore, SessionEvent, SessionOutcome, SsoClient, StreamEvent, StreamKind,
    init_metrics,
};
use chrono::{Duration, Local, Utc};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("failed to install rustls crypto provider"))?;

    load_dotenv();

    let _telemetry_guard = telemetry::init().context("failed to initialize telemetry")?;

    let config = ClientConfig::from_env().context("invalid configuration")?;
    log_config(&config);

    if config.metrics_port != 0 {
        init_metrics(config.metrics_port).context("failed to start metrics exporter")?;
    }

    let sso = SsoClient::new(config.sso.clone())?;
    let auth = AuthInjector::new(Arc::new(CredentialStore::new(sso)));
    let grpc = AuctionStreamClient::connect_lazy(&config.grpc, auth.clone())?;
    let streams = AuctionStreams::new(grpc, config.retry);
    let api = AuctionApiClient::new(config.api_url.clone(), auth);

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print_menu();
        let Some(line) = input.next_line().await? else {
            break;
        };

        match line.trim() {
            "1" => run_stream(&streams, StreamKind::AuctionStatus, &mut input).await,
            "2" => run_stream(&streams, StreamKind::ReasonabilityResults, &mut input).await,
            "3" => list_auctions(&api).await,
            "q" | "Q" => break,
            other => println!("Unknown option '{other}'"),
        }
    }

    tracing::info!("Auction stream client stopped");
    Ok(())
}

fn print_menu() {
    println!();
    println!("1 - Auction status stream");
    println!("2 - Reasonability check results stream");
    println!("3 - Auctions closing for bidding in the next 24 hours");
    println!("Q - Quit");
}

fn say(message: impl std::fmt::Display) {
    println!("[{}] {message}", Local::now().format("%H:%M:%S"));
}

/// Run one session until the server ends it, it fails, or Enter is pressed.
async fn run_stream(streams: &AuctionStreams, kind: StreamKind, input: &mut Input) {
    say("Connecting to stream - Press Enter to disconnect");
    let handle = streams.start(kind);

    let stop = async {
        if !wait_for_enter(input).await {
            tracing::debug!(kind = %kind, "Input closed, stopping stream");
        }
    };

    let outcome = handle.run_until(stop, |event| render(kind, event)).await;

    tracing::debug!(kind = %kind, outcome = outcome.as_str(), "Stream session finished");
    if let SessionOutcome::Failed(_) = outcome {
        println!("Returning to menu.");
    }
}

/// Wait for a line on `input`; `false` once it is closed or unreadable.
async fn wait_for_enter<R: AsyncBufRead + Unpin>(input: &mut Lines<R>) -> bool {
    match input.next_line().await {
        Ok(Some(_)) => true,
        Ok(None) => {
            tracing::debug!("stdin reached EOF");
            false
        }
        Err(e) => {
            tracing::debug!(error = %e, "stdin read failed");
            false
        }
    }
}

fn render(kind: StreamKind, event: SessionEvent<StreamEvent>) {
    match event {
        SessionEvent::Listening => say(format!("Listening for {}", kind.description())),
        SessionEvent::Item(payload) => say(payload),
        SessionEvent::Reconnecting { attempt, code, .. } => say(format!(
            "Status Code [{code}] - Attempting reconnect -> {attempt} time(s)"
        )),
        SessionEvent::Disconnected => say("Stream disconnected."),
        SessionEvent::Failed(error) => say(format!("Stream failed: {error}")),
    }
}

async fn list_auctions(api: &AuctionApiClient) {
    let from = Utc::now();
    let to = from + Duration::days(1);

    match api.get_auctions(from, to).await {
        Ok(auctions) if auctions.is_empty() => {
            say("No auctions close for bidding in the next 24 hours.");
        }
        Ok(auctions) => {
            for auction in auctions {
                say(format!(
                    "{} ({}) {:?}, closes {}",
                    auction.name,
                    auction.id,
                    auction.state,
                    auction.close_for_bidding.format("%Y-%m-%d %H:%M UTC")
                ));
            }
        }
        Err(e) => say(format!("Failed to list auctions: {e}")),
    }
}

/// Log the parsed configuration.
fn log_config(config: &ClientConfig) {
    tracing::info!(
        api_url = %config.api_url,
        grpc_url = %config.grpc.endpoint,
        sso_url = %config.sso.url,
        max_retries = config.retry.max_retries,
        backoff_ms = config.retry.backoff_base.as_millis(),
        metrics_port = config.metrics_port,
        "Configuration loaded"
    );
}

/// Load the nearest `.env`, searching from the working directory upward.
fn load_dotenv() {
    let Ok(cwd) = std::env::current_dir() else {
        return;
    };
    if let Some(path) = cwd
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|path| path.is_file())
    {
        let _ = dotenvy::from_path(path);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn enter_keeps_input_open() {
        let mut input = BufReader::new(&b"\nrest\n"[..]).lines();
        assert!(wait_for_enter(&mut input).await);
        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("rest"));
    }

    #[tokio::test]
    async fn eof_reports_closed_input() {
        let mut input = BufReader::new(&b""[..]).lines();
        assert!(!wait_for_enter(&mut input).await);
    }

    #[tokio::test]
    async fn invalid_utf8_reports_closed_input() {
        let mut input = BufReader::new(&b"\xff\xfe\n"[..]).lines();
        assert!(!wait_for_enter(&mut input).await);
    }
}
