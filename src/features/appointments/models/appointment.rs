use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::features::appointments::dtos::{AppointmentResponseDto, CreateAppointmentDto};
use crate::shared::constants::APPOINTMENT_STATUS_PENDING;

/// Database model for appointment
#[derive(Debug, Clone, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: String,
    pub description: String,
    pub address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Validated appointment ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub name: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: String,
    pub description: String,
    pub address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl NewAppointment {
    /// Build a `pending` appointment from an already validated submission
    /// and its parsed preferred date. Absent optional text fields become
    /// empty strings.
    pub fn pending(
        dto: CreateAppointmentDto,
        preferred_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            service_type: dto.service_type.unwrap_or_default(),
            preferred_date,
            preferred_time: dto.preferred_time.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            address: dto.address.unwrap_or_default(),
            status: APPOINTMENT_STATUS_PENDING.to_string(),
            created_at,
        }
    }
}

impl From<Appointment> for AppointmentResponseDto {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            name: a.name,
            phone: a.phone,
            service_type: a.service_type,
            preferred_date: a.preferred_date,
            preferred_time: a.preferred_time,
            description: a.description,
            status: a.status,
            address: a.address,
            created_at: a.created_at,
        }
    }
}
