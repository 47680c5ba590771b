use axum::{http::StatusCode, Json};
use crate::models::HealthResponse;
use crate::utils::time::utc_now_iso;
use tracing::debug;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    debug!("Health check requested");
    (
        StatusCode::OK,
        Json(HealthResponse {
            success: true,
            message: "API is running".to_string(),
            timestamp: utc_now_iso(),
        }),
    )
}
