//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring, and Axum server lifecycle.

use crate::application::services::{AliasAllocator, MappingService};
use crate::config::Config;
use crate::domain::alias_generator::RandomAliasGenerator;
use crate::infrastructure::persistence::{SqliteUrlStore, connect_pool};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Wires a [`MappingService`] over `store` using the configured alias policy.
pub fn build_mapping_service(
    store: Arc<SqliteUrlStore>,
    config: &Config,
) -> MappingService<SqliteUrlStore> {
    let allocator = AliasAllocator::new(store.clone(), Arc::new(RandomAliasGenerator::new()))
        .with_alias_length(config.alias_length)
        .with_max_attempts(config.alias_max_attempts);

    MappingService::new(store, allocator)
}

/// Opens the store and applies migrations.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub async fn open_store(config: &Config) -> Result<Arc<SqliteUrlStore>> {
    let pool = connect_pool(config)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let store = SqliteUrlStore::new(Arc::new(pool));
    store
        .migrate()
        .await
        .context("Failed to apply migrations")?;

    Ok(Arc::new(store))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Mapping service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config).await?;

    let mapping_service = Arc::new(build_mapping_service(store, &config));
    let state = AppState::new(mapping_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
