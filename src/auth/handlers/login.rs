/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Security
 *
 * - Passwords are verified with bcrypt's constant-time comparison
 * - An unknown email and a wrong password return the identical error,
 *   so the endpoint cannot be used to enumerate accounts
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password (same message
///   for both)
/// * `500 Internal Server Error` - database or token issuance failure
pub async fn login(
    State(auth): State<AuthService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    tracing::info!("Login request for: {}", request.email);

    let (token, user) = auth.login(request).await?;

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful!".to_string(),
        token,
        user,
    }))
}
