//! # Web API Request Handlers
//!
//! HTTP request handlers organized by functional area.

pub mod ai_insights;
pub mod approvals;
pub mod audit;
pub mod health;
pub mod users;
pub mod workflows;
