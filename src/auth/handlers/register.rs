/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Reject the email if a user already exists with it
 * 2. Validate name, email and password at the store boundary
 * 3. Hash the password using bcrypt
 * 4. Create the user record
 * 5. Generate a JWT token
 * 6. Return the token and the public user view
 *
 * # Security
 *
 * - Passwords are hashed before storage and never returned in responses
 * - JWT tokens are generated with 30-day expiration
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - a field rule was violated, or the email is taken
/// * `500 Internal Server Error` - hashing, persistence or token issuance
///   failed
pub async fn register(
    State(auth): State<AuthService>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    tracing::info!("Registration request for email: {}", request.email);

    let (token, user) = auth.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "User registered successfully!".to_string(),
            token,
            user,
        }),
    ))
}
