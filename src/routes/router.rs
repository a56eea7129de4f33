/**
 * Router Configuration
 *
 * This module provides the main router creation function that assembles
 * the API routes, the CORS layer for the browser front end, and the
 * fallback handler into a single Axum router.
 */

use axum::{http::StatusCode, Router};
use tower_http::cors::CorsLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the auth service and the
///   session keys
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // API routes (auth + health)
    let router = configure_api_routes(router, &app_state);

    // The front end is served from elsewhere, so allow cross-origin calls.
    let router = router.layer(CorsLayer::permissive());

    // Fallback handler for unknown routes
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Use AppState as router state
    router.with_state(app_state)
}
