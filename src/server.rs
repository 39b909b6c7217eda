//! HTTP server initialization and runtime setup.
//!
//! Handles storage initialization, state wiring, and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::StaticCredentials;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite storage (file created and migrated if absent)
/// - Basic-Auth credentials
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Storage cannot be opened or migrated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = SqliteUrlRepository::connect(&config.storage_path)
        .await
        .with_context(|| format!("failed to init storage at '{}'", config.storage_path))?;
    tracing::info!(storage = %config.storage_path, "storage ready");

    let credentials = StaticCredentials::new(&config.http.user, &config.http.password);

    let state = AppState::new(Arc::new(repository), Arc::new(credentials));

    let app = app_router(state, config.http.timeout);

    let listener = TcpListener::bind(&config.http.addr)
        .await
        .with_context(|| format!("failed to bind '{}'", config.http.addr))?;
    tracing::info!(address = %config.http.addr, "starting server");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves when SIGINT or (on Unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
