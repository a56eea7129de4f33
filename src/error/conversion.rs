/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `AuthError`, so handlers can
 * return the error directly and have it rendered as the JSON envelope the
 * front end expects:
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "Invalid email or password"
 * }
 * ```
 *
 * Internal failures are logged with their full detail here; the client only
 * ever sees the generic message.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!("Internal error: {}", self);
        }

        let status = self.status_code();
        let body = Json(serde_json::json!({
            "success": false,
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}
