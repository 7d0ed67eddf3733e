//! Lagify HTTP Server
//!
//! Demo server whose routes answer slowly, and sometimes fail, on purpose.

use std::future::IntoFuture;

use infrastructure::{AppConfig, LogFormat, TelemetryConfig, init_telemetry};
use presentation_http::{
    routes,
    server::{self, DEFAULT_LOG_FILTER, Drain},
};
use tokio::{net::TcpListener, sync::watch};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the format can be honored
    let config_result = AppConfig::load();
    let config = config_result.as_ref().cloned().unwrap_or_default();

    let log_format = if config.server.json_logs() {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_telemetry(&TelemetryConfig::new(DEFAULT_LOG_FILTER, log_format))?;

    info!("Lagify v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = &config_result {
        warn!("Failed to load config, using defaults: {}", e);
    }
    if config.latency.error_rate_saturates() {
        warn!(
            error_rate = config.latency.error_rate,
            "Error rate outside [0, 1]; injection will never or always fail"
        );
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        global_injection = config.latency.global_injection,
        seeded = config.seed.is_some(),
        "Configuration loaded"
    );

    // Build router
    let app = routes::create_router(&config).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Try: /, /users, /login, /health");

    let (signal_tx, mut signal_rx) = watch::channel(false);
    let serve = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            server::shutdown_signal().await;
            let _ = signal_tx.send(true);
        })
        .into_future();
    let triggered = async move {
        let _ = signal_rx.wait_for(|fired| *fired).await;
    };

    match server::drain_with_timeout(serve, triggered, config.server.shutdown_timeout()).await? {
        Drain::Completed => info!("Server shutdown complete"),
        Drain::TimedOut => warn!("Server shutdown forced, in-flight requests dropped"),
    }

    Ok(())
}
