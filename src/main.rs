//! diurnal - A blazingly fast, in-memory, CSV-to-API temperature estimation server
//!
//! This is the main entry point for the diurnal application.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use diurnal::handlers::{
    estimate_handler, heartbeat_handler, series_handler, table_handler, trace_handler,
};
use diurnal::logging::{create_http_trace_layer, init_tracing, log_series_load_stats};
use diurnal::{AppState, Config, DiurnalError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Validate configuration
    config.validate().map_err(|e| {
        eprintln!("Invalid configuration: {}", e);
        e
    })?;

    init_tracing(&config.log_level);

    info!("Starting diurnal v{}", env!("CARGO_PKG_VERSION"));

    // Load the observation series and create application state
    let (source, series) = diurnal::ingest::load_series(&config).map_err(|e| {
        error!("Failed to load observation data: {}", e);
        e
    })?;

    log_series_load_stats(&source, series.len(), series.span(), series.spacing());

    let app_state = AppState::new_shared(config.clone(), source, series);

    // Validate the application state
    app_state.validate().map_err(|e| {
        error!("Invalid application state: {}", e);
        e
    })?;

    // Build the router
    let app = Router::new()
        .route("/heartbeat", get(heartbeat_handler))
        .route("/series", get(series_handler))
        .route("/estimate", get(estimate_handler))
        .route("/table", get(table_handler))
        .route("/trace", get(trace_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Create the server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| DiurnalError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| DiurnalError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    // Set up graceful shutdown
    let shutdown_future = shutdown_signal();

    info!("Server is ready to accept connections");

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_future)
        .await
        .map_err(|e| DiurnalError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
