//! # Health Check Handlers
//!
//! Kubernetes-compatible liveness and readiness endpoints.
//!
//! Liveness (`/health`) never consults external state: a slow or dead
//! downstream dependency must not get a healthy process restarted.
//! Readiness (`/readiness`, `/metrics/ready`) re-probes the store and cache
//! on every call.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::web::state::AppState;

/// Liveness response body
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    environment: String,
}

/// Readiness response body, including the full per-dependency detail map
#[derive(Serialize)]
pub struct ReadinessResponse {
    status: String,
    service: String,
    checks: BTreeMap<String, String>,
}

/// Liveness probe: GET /health
///
/// Always `UP` once the process can respond; performs no dependency probing.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: state.config.service_name.clone(),
        environment: state.config.environment.clone(),
    })
}

/// Readiness probe: GET /readiness
///
/// Probes every registered dependency fresh. 503 iff a critical dependency
/// is down; the body always carries the complete detail map so an operator
/// can tell which dependency failed and why.
pub async fn readiness(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    debug!("performing readiness probe");

    let report = state.readiness.check_readiness().await;

    let status_code = if report.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = ReadinessResponse {
        status: if report.ready { "UP" } else { "DOWN" }.to_string(),
        service: state.config.service_name.clone(),
        checks: report.checks,
    };

    (status_code, Json(response))
}

/// Narrow readiness probe: GET /metrics/ready
///
/// Boolean form of the readiness question, considering only critical
/// dependencies.
pub async fn metrics_ready(
    State(state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let ready = state.readiness.critical_dependencies_up().await;

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(json!({ "ready": ready })))
}
