/**
 * Profile Handlers
 *
 * This module implements the profile endpoints:
 *
 * - GET /api/auth/profile - fetch the authenticated user's profile
 * - PUT /api/auth/profile - update name/college/course/year
 *
 * Both routes sit behind the authentication middleware, which verifies the
 * bearer token and attaches the resolved user ID to the request. A token
 * whose subject no longer exists yields 404, not 401 - the token itself
 * was fine.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{ProfileResponse, UpdateProfileRequest, UpdateProfileResponse};
use crate::auth::service::AuthService;
use crate::error::AuthError;
use crate::middleware::AuthUser;

/// Fetch the authenticated user's profile
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token (from the middleware)
/// * `404 Not Found` - the token's subject no longer resolves to a user
pub async fn get_profile(
    State(auth): State<AuthService>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileResponse>, AuthError> {
    let view = auth.profile(user.user_id).await?;

    Ok(Json(ProfileResponse {
        success: true,
        user: view,
    }))
}

/// Update the authenticated user's profile
///
/// Only name, college, course and year can change through this endpoint;
/// absent (or empty) fields keep their stored value.
///
/// # Errors
///
/// * `400 Bad Request` - a changed field violated its rule
/// * `401 Unauthorized` - missing or invalid token (from the middleware)
/// * `404 Not Found` - the token's subject no longer resolves to a user
pub async fn update_profile(
    State(auth): State<AuthService>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, AuthError> {
    let view = auth.update_profile(user.user_id, request).await?;

    Ok(Json(UpdateProfileResponse {
        success: true,
        message: "Profile updated successfully!".to_string(),
        user: view,
    }))
}
