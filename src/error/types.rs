/**
 * Authentication Error Types
 *
 * This module defines the error taxonomy used across the authentication
 * backend. Each variant maps to an HTTP status code and a client-facing
 * message via `status_code()` and `message()`.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// All failure modes of the authentication backend.
///
/// The credential-related variants are deliberately coarse: a login against
/// an unknown email and a login with a wrong password both produce
/// `InvalidCredentials`, and an expired token surfaces to clients with the
/// same message as a tampered one. Keeping the variants distinct internally
/// still lets tests and logs tell the cases apart.
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more field rules were violated.
    ///
    /// Carries one message per violated rule; they are joined with ", "
    /// for display.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// A user already exists with the given email address.
    #[error("User already exists with this email")]
    DuplicateEmail,

    /// Unknown email or wrong password. The message never reveals which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No Authorization header was supplied on a protected route.
    #[error("No token provided")]
    MissingToken,

    /// The bearer token was malformed or its signature did not verify.
    #[error("Invalid token")]
    TokenInvalid,

    /// The bearer token was well-signed but past its expiry.
    ///
    /// Surfaced to clients with the same message as `TokenInvalid`.
    #[error("Invalid token")]
    TokenExpired,

    /// The authenticated identity no longer resolves to a user record.
    #[error("User not found")]
    NotFound,

    /// Database failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure.
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure.
    ///
    /// Verification failures are mapped to `TokenInvalid`/`TokenExpired`
    /// before they reach this variant; this only covers issuance.
    #[error("Token signing error: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Create a validation error from a list of rule-violation messages.
    pub fn validation<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation(messages.into_iter().map(Into::into).collect())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` / `DuplicateEmail` - 400 Bad Request
    /// - `InvalidCredentials` / token errors - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - internal wrappers - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials
            | Self::MissingToken
            | Self::TokenInvalid
            | Self::TokenExpired => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::TokenSigning(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message that may be returned to the client.
    ///
    /// Internal failures are reduced to a generic message; the detail only
    /// ever goes to the logs.
    pub fn message(&self) -> String {
        if self.is_internal() {
            "Server error".to_string()
        } else {
            self.to_string()
        }
    }

    /// Whether this error is an unexpected internal failure.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Hash(_) | Self::TokenSigning(_)
        )
    }
}
