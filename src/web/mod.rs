//! # Web API
//!
//! Router assembly for the gateway. Health probes are public; resource
//! routes sit behind the bearer-token admission middleware.

pub mod auth;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::web::state::AppState;

/// Build the gateway router with the full middleware stack applied.
///
/// Health probes and `/auth/logout` are public. `/users` is the login call
/// the frontend makes before it holds a token, so it only validates a
/// bearer credential when one is supplied. Everything else requires one.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/approvals", get(handlers::approvals::list_approvals))
        .route(
            "/approvals/:approval_id",
            patch(handlers::approvals::update_approval),
        )
        .route("/workflows", get(handlers::workflows::list_workflows))
        .route(
            "/workflows/:workflow_id",
            patch(handlers::workflows::update_workflow),
        )
        .route(
            "/auditLogs",
            get(handlers::audit::list_audit_logs).post(handlers::audit::create_audit_log),
        )
        .route("/aiInsights", get(handlers::ai_insights::list_ai_insights))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let login = Router::new()
        .route("/users", get(handlers::users::list_users))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::verify_if_present,
        ));

    let router = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/readiness", get(handlers::health::readiness))
        .route("/metrics/ready", get(handlers::health::metrics_ready))
        .route("/auth/logout", post(handlers::users::logout))
        .merge(login)
        .merge(protected);

    middleware::apply_middleware_stack(router).with_state(state)
}
