//! # Approval Endpoints
//!
//! Demo pass-throughs for the approvals view. Return static data; the real
//! approval records live in the data backend.

use axum::extract::Path;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
pub struct ApprovalUpdate {
    /// APPROVED, REJECTED or PENDING
    status: String,
    #[serde(default)]
    reason: Option<String>,
}

/// GET /approvals
pub async fn list_approvals() -> Json<Value> {
    Json(json!([
        {
            "id": "approval-001",
            "workflowId": "workflow-001",
            "status": "PENDING",
            "requester": "user-001",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }
    ]))
}

/// PATCH /approvals/{approval_id}
///
/// Echoes the requested status change back as the updated record.
pub async fn update_approval(
    Path(approval_id): Path<String>,
    Json(update): Json<ApprovalUpdate>,
) -> Json<Value> {
    Json(json!({
        "id": approval_id,
        "workflowId": "workflow-001",
        "status": update.status,
        "reason": update.reason,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-19T00:00:00Z"
    }))
}
