//! HTTP server initialization and runtime setup.
//!
//! Handles the package registry, the component catalog and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::{ComponentRepository, PackageRepository};
use crate::infrastructure::components::{FsComponentRepository, PreloadedComponentRepository};
use crate::infrastructure::persistence::{InMemoryPackageRepository, PgPackageRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool with the configured limits and applies migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn connect_database(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Opens the package registry: PostgreSQL when configured, in-memory otherwise.
///
/// Built-in packages are seeded into either backend. Returns the registry and
/// the backend name reported by the health check.
///
/// # Errors
///
/// Returns an error if the database is configured but unreachable.
pub async fn open_registry(config: &Config) -> Result<(Arc<dyn PackageRepository>, &'static str)> {
    match config.database_url {
        Some(ref url) => {
            let pool = connect_database(config, url).await?;
            let repository = PgPackageRepository::new(Arc::new(pool));

            let seeded = repository.seed_builtin().await?;
            if seeded > 0 {
                tracing::info!("Seeded {} built-in template packages", seeded);
            }

            Ok((Arc::new(repository), "postgres"))
        }
        None => {
            tracing::warn!("No database configured; template packages are kept in memory");
            Ok((Arc::new(InMemoryPackageRepository::with_builtin()), "memory"))
        }
    }
}

/// Opens the component catalog at `COMPONENTS_DIR`.
///
/// # Errors
///
/// Returns an error if preloading is enabled and any component fails to load.
pub async fn open_components(config: &Config) -> Result<Arc<dyn ComponentRepository>> {
    let fs = FsComponentRepository::new(&config.components_dir);

    if !config.preload_components {
        tracing::info!(
            "Component catalog read from {} on every render",
            fs.root().display()
        );
        return Ok(Arc::new(fs));
    }

    let preloaded = PreloadedComponentRepository::load(&fs)
        .await
        .with_context(|| format!("Failed to load components from {}", fs.root().display()))?;

    if preloaded.is_empty() {
        tracing::warn!("Component catalog at {} is empty", fs.root().display());
    }

    Ok(Arc::new(preloaded))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Package registry (PostgreSQL with migrations and seeding, or in-memory)
/// - Component catalog (preloaded or filesystem)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Component preloading fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (packages, backend) = open_registry(&config).await?;
    let components = open_components(&config).await?;

    if config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set; admin endpoints are disabled");
    }

    let state = AppState::new(packages, components, config.admin_token.as_deref(), backend);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
