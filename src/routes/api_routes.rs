/**
 * API Route Handlers
 *
 * This module wires the API endpoints into the router:
 *
 * ## Authentication
 * - `POST /api/auth/register` - user registration
 * - `POST /api/auth/login` - user login
 * - `GET /api/auth/profile` - fetch current user (requires bearer token)
 * - `PUT /api/auth/profile` - update current user (requires bearer token)
 *
 * ## Service
 * - `GET /api/health` - health check
 */

use axum::{response::Json, Router};
use chrono::Utc;

use crate::auth::{get_profile, login, register, update_profile};
use crate::middleware::auth_middleware;
use crate::server::state::AppState;

/// Configure API routes
///
/// The profile routes are wrapped in the authentication middleware; the
/// registration, login and health routes are public.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/api/auth/profile",
            axum::routing::get(get_profile).put(update_profile),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    router
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/health", axum::routing::get(health))
        .merge(protected)
}

/// Health check handler
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "EdForge API is running!",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
