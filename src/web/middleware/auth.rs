//! # Authentication Middleware
//!
//! Bearer-token admission applied to protected routes before any handler
//! runs. A missing or structurally absent credential and a credential that
//! fails verification both surface as 401, but stay distinct internally.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

use crate::web::auth::AuthError;
use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Require a valid bearer credential on the request.
///
/// On success the decoded claims are inserted into request extensions for
/// handlers that want to read a subject identifier. No authorization
/// decision is made here.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(ApiError::MissingCredential)?;

    let header_str = header.to_str().map_err(|_| ApiError::MissingCredential)?;
    let token = extract_bearer_token(header_str)?;

    let claims = state.verifier.verify(token).map_err(|err| {
        warn!(error = %err, "bearer credential rejected");
        ApiError::from(err)
    })?;

    if let Some(subject) = claims.subject() {
        debug!(subject = %subject, "authenticated request");
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Verify a bearer credential only when one is supplied.
///
/// Used by the login-flow routes the frontend calls before it holds a
/// token: a request without a bearer credential passes through, but a
/// supplied credential that fails verification is still rejected.
pub async fn verify_if_present(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::to_owned);

    if let Some(token) = bearer {
        let claims = state.verifier.verify(&token).map_err(|err| {
            warn!(error = %err, "supplied bearer credential rejected");
            ApiError::from(err)
        })?;
        request.extensions_mut().insert(claims);
    }

    Ok(next.run(request).await)
}

/// Extract the token from a `Bearer <token>` header value.
///
/// Anything other than the literal `Bearer ` prefix followed by a non-empty
/// token is treated as a missing credential, per the admission policy.
fn extract_bearer_token(header: &str) -> Result<&str, AuthError> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredential)?;

    if token.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc123").unwrap(), "abc123");

        assert_eq!(
            extract_bearer_token("Basic abc123"),
            Err(AuthError::MissingCredential)
        );
        assert_eq!(
            extract_bearer_token("Bearer "),
            Err(AuthError::MissingCredential)
        );
        assert_eq!(
            extract_bearer_token("abc123"),
            Err(AuthError::MissingCredential)
        );
        assert_eq!(
            extract_bearer_token("bearer abc123"),
            Err(AuthError::MissingCredential)
        );
    }
}
