use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::services::get_metrics;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "invoicecraft-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Connectivity probe used by clients before their first real call.
pub async fn api_status() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "invoicecraft backend is running"
    }))
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
