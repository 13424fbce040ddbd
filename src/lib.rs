//! # Automation Gateway
//!
//! Façade service between the frontend and the separately-owned data
//! backend. The resource endpoints are thin pass-throughs; the subsystem
//! with real behavior is the request admission and liveness gate:
//!
//! - [`web::auth::TokenVerifier`]: bearer-credential verification applied
//!   to protected routes.
//! - [`health::ReadinessChecker`]: per-call dependency probing behind the
//!   readiness endpoints, distinguishing critical (store) from advisory
//!   (cache) dependencies.

pub mod config;
pub mod health;
pub mod logging;
pub mod web;
