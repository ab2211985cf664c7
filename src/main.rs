//! Skycast - a weather lookup server
//!
//! Proxies forecast, geocoding and AI summary providers behind typed
//! in-process TTL caches.

use std::net::SocketAddr;

use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skycast::api::create_router;
use skycast::{spawn_sweep_task, AppState, Config};

/// Main entry point for the Skycast server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create cache stores and upstream clients
/// 4. Start one background TTL sweep task per cache
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycast=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skycast weather lookup server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, default_ttl={}s, forecast_ttl={}s, summary_ttl={}s, sweep_interval={}s",
        config.server_port,
        config.default_ttl,
        config.forecast_ttl,
        config.summary_ttl,
        config.sweep_interval
    );
    if config.openweather_api_key.is_empty() {
        warn!("OPENWEATHERMAP_APPID is not set; forecast lookups will fail");
    }
    if config.google_ai_api_key.is_empty() {
        warn!("GOOGLE_AI_API_KEY is not set; AI day summaries will be unavailable");
    }

    // Create application state with caches and upstream clients
    let state = AppState::from_config(&config);
    info!("Cache stores and upstream clients initialized");

    // Start one background sweep task per cache
    let sweep_handles = vec![
        spawn_sweep_task(state.forecast_cache.clone(), "forecast", config.sweep_interval),
        spawn_sweep_task(state.summary_cache.clone(), "summary", config.sweep_interval),
    ];
    info!("Background sweep tasks started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep_handles))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep tasks so no recurring work dangles
/// after teardown, then allows graceful shutdown.
async fn shutdown_signal(sweep_handles: Vec<JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the sweep tasks
    for handle in sweep_handles {
        handle.abort();
    }
    warn!("Sweep tasks aborted");
}
