//! Server lifecycle: signal handling and bounded graceful shutdown

use std::{future::Future, time::Duration};

use tokio::signal;
use tracing::{info, warn};

/// Log filter used when `RUST_LOG` is unset
///
/// Every crate that logs needs its own directive; targets left out are off.
pub const DEFAULT_LOG_FILTER: &str =
    "lagify_server=debug,presentation_http=debug,infrastructure=debug,tower_http=debug";

/// How a server run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drain {
    /// The server finished on its own, in-flight requests included
    Completed,
    /// Requests were still in flight when the shutdown timeout expired
    TimedOut,
}

/// Drive `serve` until it finishes, or until `timeout` has passed since
/// `triggered` resolved
///
/// `serve` must begin its own graceful shutdown when `triggered` fires.
/// Connections still open when the timeout expires are dropped with `serve`.
pub async fn drain_with_timeout<S, T, E>(
    serve: S,
    triggered: T,
    timeout: Duration,
) -> Result<Drain, E>
where
    S: Future<Output = Result<(), E>>,
    T: Future<Output = ()>,
{
    tokio::pin!(serve);

    tokio::select! {
        result = &mut serve => return result.map(|()| Drain::Completed),
        () = triggered => {}
    }

    info!("Waiting up to {:?} for connections to close...", timeout);

    match tokio::time::timeout(timeout, serve).await {
        Ok(result) => result.map(|()| Drain::Completed),
        Err(_) => {
            warn!(
                timeout_secs = timeout.as_secs(),
                "Shutdown timeout expired with requests still in flight"
            );
            Ok(Drain::TimedOut)
        },
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
