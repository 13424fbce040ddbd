//! # Correlation ID Middleware
//!
//! Propagates `X-Correlation-ID` for request tracing. A caller-supplied
//! value is echoed back unchanged; otherwise a fresh UUID is generated.
//! The ID is threaded explicitly through request extensions, never used
//! for authentication.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Correlation ID wrapper for extension storage
#[derive(Debug, Clone)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Echo or generate the correlation ID and attach it to the response.
pub async fn propagate_correlation_id(mut request: Request, next: Next) -> Response {
    let correlation_id = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(CorrelationId(correlation_id.clone()));

    let mut response = next.run(request).await;

    // A caller-supplied ID already passed header parsing; a generated UUID
    // is always a valid header value.
    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }

    response
}
