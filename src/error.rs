use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::auth::dto::FieldError;
use crate::auth::store::StoreError;

/// Failure taxonomy for the auth flow.
///
/// Everything a handler can return maps through here, so internal detail
/// never reaches the client: `Internal` logs the full chain server-side
/// and answers with a generic message.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Malformed or out-of-range input, reported per field.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Duplicate registration.
    #[error("account already exists")]
    Conflict,

    /// Bad credentials at login. Deliberately silent on whether the email
    /// exists.
    #[error("invalid email or password")]
    Unauthorized,

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "message": "Validation error",
                    "errors": errors,
                })),
            )
                .into_response(),
            // Duplicates answer 401 rather than 409; clients depend on it.
            AuthError::Conflict => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "message": "account already exists" })),
            )
                .into_response(),
            AuthError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "message": "invalid email or password" })),
            )
                .into_response(),
            AuthError::Internal(err) => {
                error!(error = ?err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "message": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            // A lost uniqueness race surfaces like any other duplicate.
            StoreError::DuplicateEmail => AuthError::Conflict,
            StoreError::Other(e) => AuthError::Internal(e),
        }
    }
}
