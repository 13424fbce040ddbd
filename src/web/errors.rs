//! # Web API Error Types
//!
//! HTTP-facing error type and its response conversion. Bodies follow the
//! façade's `{"detail": ...}` contract. Credential failures carry fixed,
//! non-revealing messages. Dependency probe failures never become an
//! `ApiError`: the readiness handlers fold them into the verdict body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::web::auth::AuthError;

/// Web API errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("authorization header required")]
    MissingCredential,

    #[error("invalid authorization token")]
    InvalidCredential,

    #[error("internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::MissingCredential => (
                StatusCode::UNAUTHORIZED,
                "Authorization header required".to_string(),
            ),
            ApiError::InvalidCredential => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization token".to_string(),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredential => ApiError::MissingCredential,
            // Issuance failures never reach a request path, but map them to
            // a 500 rather than a misleading 401 if one ever does.
            AuthError::Issuance(_) => ApiError::Internal,
            AuthError::InvalidCredential => ApiError::InvalidCredential,
        }
    }
}

/// Result type alias for web API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn credential_errors_map_to_generic_401_bodies() {
        let response = ApiError::InvalidCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "Invalid authorization token");
    }

    #[tokio::test]
    async fn missing_credential_uses_required_header_message() {
        let response = ApiError::from(AuthError::MissingCredential).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "Authorization header required");
    }
}
