use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for submitting an appointment
///
/// Required fields are optional here so that a missing or `null` value
/// produces a field-specific validation message instead of a JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAppointmentDto {
    /// Contact name (required)
    #[validate(length(max = 100, message = "name must not exceed 100 characters"))]
    pub name: Option<String>,

    /// 11 ASCII digits, no separators (required)
    #[schema(example = "13800138000")]
    pub phone: Option<String>,

    /// Requested service (required)
    #[validate(length(max = 50, message = "service_type must not exceed 50 characters"))]
    pub service_type: Option<String>,

    /// Calendar date as `YYYY-MM-DD`; empty is treated as absent
    #[schema(example = "2024-06-01")]
    pub preferred_date: Option<String>,

    #[validate(length(max = 20, message = "preferred_time must not exceed 20 characters"))]
    pub preferred_time: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 255, message = "address must not exceed 255 characters"))]
    pub address: Option<String>,
}

/// Response DTO for appointment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentResponseDto {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: String,
    pub description: String,
    pub status: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}
