//! Error handling for the API server.
//!
//! All handlers return `Result<T, ApiError>`; the `IntoResponse` impl maps
//! each variant to its HTTP status so no error crosses a request boundary
//! uncaught. There are no retries anywhere; a transient store failure
//! surfaces immediately as a 500.
//!
//! Status mapping:
//!
//! - `BadRequest`: 400 (malformed identifier or body)
//! - `Conflict`: 400 (duplicate email reports 400, not 409, on this API)
//! - `Unauthorized`: 401 (bad credentials)
//! - `NotFound`: 404
//! - `Internal`: 500 (generic message; detail is logged server-side only)

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tally_shared::auth::{jwt::JwtError, password::PasswordError};

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request: bad identifier format or body shape (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Bad credentials (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No matching record (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness violation, e.g. duplicate email (400)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any underlying persistence or service failure (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code, e.g. `"bad_request"`
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, "conflict", msg),
            ApiError::Internal(msg) => {
                // Log detail server-side, never expose it to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// JSON body extractor whose rejection is an [`ApiError`]
///
/// A body that fails to parse or is missing required fields yields 400
/// rather than axum's default 422.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return ApiError::Conflict("User already exists".to_string());
                    }
                }
                ApiError::Internal(format!("Database error: {}", db_err))
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert JWT errors to API errors
impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => ApiError::Unauthorized("Token expired".to_string()),
            JwtError::ValidationError(_) => {
                ApiError::Unauthorized("Invalid token".to_string())
            }
            JwtError::CreateError(msg) => {
                ApiError::Internal(format!("Token creation failed: {}", msg))
            }
        }
    }
}

/// Convert password errors to API errors
impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Internal(format!("Password operation failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid user ID".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid user ID");

        let err = ApiError::NotFound("User not found".to_string());
        assert_eq!(err.to_string(), "Not found: User not found");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::BadRequest("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Unauthorized("x".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            // Duplicate email is reported as 400, not 409
            (ApiError::Conflict("x".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_expired_token_maps_to_401() {
        let err: ApiError = JwtError::Expired.into();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
