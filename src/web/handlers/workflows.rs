//! # Workflow Endpoints
//!
//! Demo pass-throughs for the workflows view. Return static data; workflow
//! state lives in the data backend.

use axum::extract::Path;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
pub struct WorkflowUpdate {
    /// ACTIVE, INACTIVE, COMPLETED or FAILED
    status: String,
}

/// GET /workflows
pub async fn list_workflows() -> Json<Value> {
    Json(json!([
        {
            "id": "workflow-001",
            "name": "Approval Workflow",
            "status": "ACTIVE",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }
    ]))
}

/// PATCH /workflows/{workflow_id}
///
/// Echoes the requested status change back as the updated record.
pub async fn update_workflow(
    Path(workflow_id): Path<String>,
    Json(update): Json<WorkflowUpdate>,
) -> Json<Value> {
    Json(json!({
        "id": workflow_id,
        "name": "Approval Workflow",
        "status": update.status,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-19T00:00:00Z"
    }))
}
