//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, state wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::persistence::{MemoryUserRepository, PgUserRepository};
use crate::infrastructure::security::BcryptHasher;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations, or the in-memory store
///   when no database is configured
/// - The bcrypt password hasher
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let users: Arc<dyn UserRepository> = if let Some(database_url) = &config.database_url {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;
        tracing::info!("Connected to database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to migrate")?;

        Arc::new(PgUserRepository::new(Arc::new(pool)))
    } else {
        tracing::warn!("No database configured, using in-memory user store");
        Arc::new(MemoryUserRepository::new())
    };

    let hasher = Arc::new(BcryptHasher::new(config.bcrypt_cost));

    let state = AppState::new(users, hasher);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
