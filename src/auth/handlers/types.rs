/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication endpoints. Field names follow the front end's camelCase
 * wire format.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::users::{User, UserType};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name (2-50 chars)
    pub name: String,
    /// Email address
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
    pub college: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
    /// Account type; anything absent or unrecognized becomes "student"
    pub user_type: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Profile update request. Absent fields - and, matching the behavior the
/// front end was built against, empty-string fields - leave the stored
/// value unchanged.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub college: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
}

/// Public view of a user record: every field except the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub college: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
    pub user_type: UserType,
    pub avatar: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            college: user.college,
            course: user.course,
            year: user.year,
            user_type: user.user_type,
            avatar: user.avatar,
            is_verified: user.is_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response to a successful registration or login: a fresh token plus the
/// public user view.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    /// JWT bearer token (30-day expiration)
    pub token: String,
    pub user: UserView,
}

/// Response to a profile fetch.
#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserView,
}

/// Response to a profile update.
#[derive(Serialize, Debug)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub message: String,
    pub user: UserView,
}
