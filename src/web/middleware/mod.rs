//! # Web API Middleware
//!
//! Middleware stack for the gateway: bearer-token admission on protected
//! routes and correlation-ID propagation plus tracing and CORS on every
//! route.

pub mod auth;
pub mod correlation_id;

use axum::middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Apply the router-wide middleware stack.
///
/// Correlation-ID propagation sits outermost so every response carries the
/// header, including error responses produced by inner layers. `layer`
/// wraps the layers added before it, so the correlation layer is added
/// last.
pub fn apply_middleware_stack(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .layer(middleware::from_fn(
            correlation_id::propagate_correlation_id,
        ))
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
