/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server:
 * connecting the database pool, running migrations, assembling the
 * application state and configuring the router.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite pool from the configured URL
 * 2. Run database migrations
 * 3. Build the user store and session service from the configuration
 * 4. Create the router with all routes and middleware
 *
 * Unlike a missing database, a failed connection or migration is fatal:
 * an auth backend without its user table has nothing to serve.
 */

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;

use crate::auth::sessions::SessionService;
use crate::auth::users::UserStore;
use crate::routes::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - configuration loaded at startup
///
/// # Returns
///
/// Configured Axum Router ready to serve requests, or the database error
/// that prevented startup.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    let state = AppState::new(
        UserStore::new(pool),
        SessionService::new(&config.jwt_secret),
    );

    Ok(create_router(state))
}
