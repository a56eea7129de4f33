/**
 * Authentication Middleware
 *
 * This module provides the middleware protecting routes that require a
 * bearer token. It extracts the token from the Authorization header,
 * verifies it against the session service and attaches the resolved user
 * ID to the request for handlers to pick up.
 *
 * A missing header is reported as "No token provided"; every verification
 * failure - malformed, tampered or expired - surfaces uniformly as
 * "Invalid token" so callers cannot tell which check failed. The
 * middleware does not touch the user store: a token whose subject has
 * vanished is the service layer's problem, not an authentication failure.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::AuthError;
use crate::server::state::AppState;

/// Authenticated identity extracted from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the Authorization header (`Bearer <token>`)
/// 2. Verifies signature and expiry via the session service
/// 3. Attaches the resolved user ID to request extensions
///
/// Returns 401 Unauthorized if the token is missing or does not verify.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::MissingToken
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        AuthError::TokenInvalid
    })?;

    let user_id = app_state.sessions.verify(token).map_err(|e| {
        tracing::warn!("Token rejected: {:?}", e);
        e
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind `auth_middleware` take this as a parameter to receive
/// the identity the middleware resolved.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::MissingToken
            })
    }
}
