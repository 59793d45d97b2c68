use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::features::health::dtos::HealthResponseDto;
use crate::features::health::services::HealthService;

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponseDto),
        (status = 500, description = "Database unreachable", body = HealthResponseDto)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(service): State<Arc<HealthService>>,
) -> (StatusCode, Json<HealthResponseDto>) {
    match service.check().await {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(body) => (StatusCode::INTERNAL_SERVER_ERROR, Json(body)),
    }
}
