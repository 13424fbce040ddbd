//! # Web API Application State
//!
//! Shared, read-only state for request handlers: configuration, the token
//! verifier, and the readiness checker. All members are constructed once at
//! startup and shared by `Arc`; nothing here is mutable across requests.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::health::ReadinessChecker;
use crate::web::auth::TokenVerifier;

/// Shared application state for the web API
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub verifier: Arc<TokenVerifier>,
    pub readiness: Arc<ReadinessChecker>,
}

impl AppState {
    pub fn new(
        config: Arc<GatewayConfig>,
        verifier: TokenVerifier,
        readiness: ReadinessChecker,
    ) -> Self {
        Self {
            config,
            verifier: Arc::new(verifier),
            readiness: Arc::new(readiness),
        }
    }
}
