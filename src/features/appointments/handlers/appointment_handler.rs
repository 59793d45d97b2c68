use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::appointments::dtos::{AppointmentResponseDto, CreateAppointmentDto};
use crate::features::appointments::services::AppointmentService;

/// Submit an appointment request
///
/// `name`, `service_type` and `phone` are required; `phone` must be exactly
/// 11 digits. The stored appointment starts with status `pending`.
#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentResponseDto),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Store error")
    ),
    tag = "appointments"
)]
pub async fn create_appointment(
    State(service): State<Arc<AppointmentService>>,
    AppJson(dto): AppJson<CreateAppointmentDto>,
) -> Result<(StatusCode, Json<AppointmentResponseDto>)> {
    let appointment = service.submit(dto).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// List appointments, newest first
#[utoipa::path(
    get,
    path = "/api/appointments",
    responses(
        (status = 200, description = "List of appointments", body = Vec<AppointmentResponseDto>),
        (status = 500, description = "Store error")
    ),
    tag = "appointments"
)]
pub async fn list_appointments(
    State(service): State<Arc<AppointmentService>>,
) -> Result<Json<Vec<AppointmentResponseDto>>> {
    let appointments = service.list().await?;
    Ok(Json(appointments))
}
