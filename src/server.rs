//! HTTP server initialization and runtime setup.
//!
//! Owns the explicit init points the handlers rely on: store
//! construction, migrations, service wiring, and the Axum serve loop.

use crate::config::Config;
use crate::application::services::{LinkService, RedirectResolver, StatsService};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::persistence::{MemoryLinkStore, PgLinkStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The link store: PostgreSQL (with migrations) when `DATABASE_URL`
///   is configured, otherwise the in-memory store
/// - Services wired to that single store handle
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if the database connection, migration run, bind, or
/// serve loop fails.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn LinkStore> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            Arc::new(PgLinkStore::new(Arc::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store; links will not survive a restart");
            Arc::new(MemoryLinkStore::new())
        }
    };

    let state = AppState::new(
        Arc::new(LinkService::new(store.clone())),
        Arc::new(RedirectResolver::new(store.clone())),
        Arc::new(StatsService::new(store)),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl-C handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
