//! # AI Insight Endpoints
//!
//! Demo pass-through for the insights view; the real recommendations come
//! from the backend's analysis service.

use axum::Json;
use serde_json::{json, Value};

/// GET /aiInsights
pub async fn list_ai_insights() -> Json<Value> {
    Json(json!([
        {
            "id": "insight-001",
            "title": "High approval queue",
            "description": "There are 15 pending approvals that need attention",
            "riskLevel": "HIGH",
            "recommendation": "Review and approve pending items",
            "createdAt": "2024-01-19T00:00:00Z"
        },
        {
            "id": "insight-002",
            "title": "Unusual workflow pattern",
            "description": "Workflow completion time is 30% slower than average",
            "riskLevel": "MEDIUM",
            "recommendation": "Investigate workflow bottlenecks",
            "createdAt": "2024-01-19T00:00:00Z"
        }
    ]))
}
