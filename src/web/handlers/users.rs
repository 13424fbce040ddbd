//! # User Endpoints
//!
//! Demo pass-throughs used by the frontend login flow. Return static data;
//! the real user store is owned by the data backend.
//!
//! `/users` is the login call and runs before the frontend holds a token,
//! so it validates a bearer credential only when one is supplied (the
//! `verify_if_present` middleware).

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
pub struct UserQuery {
    email: Option<String>,
    password: Option<String>,
}

/// GET /users?email=&password=
///
/// Returns a single demo user when both credentials are supplied, an empty
/// list otherwise.
pub async fn list_users(Query(query): Query<UserQuery>) -> Json<Value> {
    match (query.email, query.password) {
        (Some(email), Some(_)) => Json(json!([
            {
                "id": "user-001",
                "email": email,
                "name": "Demo User",
                "role": "ADMIN",
                "createdAt": "2024-01-01T00:00:00Z"
            }
        ])),
        _ => Json(json!([])),
    }
}

/// POST /auth/logout
///
/// Stateless acknowledgement; the frontend discards its token client-side.
pub async fn logout() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Successfully logged out"
    }))
}
