use axum::Json;
use chrono::Utc;

use crate::models::generation::HealthStatus;

/// GET /api/health
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        timestamp: Utc::now(),
    })
}
