//! # Audit Log Endpoints
//!
//! Demo pass-throughs for audit trail entries. Nothing is persisted;
//! creation echoes the entry back with a generated id and timestamp.

use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct AuditLogCreate {
    /// Entity type, e.g. "approval", "workflow", "user"
    entity: String,
    #[serde(rename = "entityId")]
    entity_id: String,
    /// Action performed, e.g. "CREATE", "UPDATE", "APPROVE"
    action: String,
    #[serde(default)]
    details: Option<Value>,
}

/// GET /auditLogs
pub async fn list_audit_logs() -> Json<Value> {
    Json(json!([
        {
            "id": "audit-001",
            "entity": "approval",
            "entityId": "approval-001",
            "action": "APPROVED",
            "userId": "user-001",
            "timestamp": "2024-01-19T00:00:00Z",
            "details": {"reason": "Approved by admin"}
        }
    ]))
}

/// POST /auditLogs
pub async fn create_audit_log(Json(entry): Json<AuditLogCreate>) -> Json<Value> {
    Json(json!({
        "id": Uuid::new_v4().to_string(),
        "entity": entry.entity,
        "entityId": entry.entity_id,
        "action": entry.action,
        "userId": "user-001",
        "timestamp": Utc::now().to_rfc3339(),
        "details": entry.details
    }))
}
