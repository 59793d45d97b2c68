use std::sync::Arc;

use chrono::NaiveDate;
use validator::Validate;

use crate::core::clock::Clock;
use crate::core::error::{AppError, Result};
use crate::features::appointments::dtos::{AppointmentResponseDto, CreateAppointmentDto};
use crate::features::appointments::models::NewAppointment;
use crate::features::appointments::repositories::AppointmentRepository;
use crate::shared::constants::{PHONE_LENGTH, PREFERRED_DATE_FORMAT};
use crate::shared::validation::{first_error_message, is_blank, PHONE_DIGITS_REGEX};

/// Field order used when several column limits fail at once
const LIMIT_FIELD_ORDER: [&str; 4] = ["name", "service_type", "preferred_time", "address"];

/// Check a submission in a fixed order and stop at the first problem:
/// required fields (`name`, `service_type`, `phone`), phone characters,
/// phone length, preferred date, then column limits.
///
/// Returns the parsed preferred date; a blank one is absent.
pub fn validate_submission(dto: &CreateAppointmentDto) -> Result<Option<NaiveDate>> {
    let required = [
        ("name", dto.name.as_deref()),
        ("service_type", dto.service_type.as_deref()),
        ("phone", dto.phone.as_deref()),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| is_blank(*value)) {
        return Err(AppError::Validation(format!("{} is required", field)));
    }

    let phone = dto.phone.as_deref().unwrap_or_default();
    if !PHONE_DIGITS_REGEX.is_match(phone) {
        return Err(AppError::Validation(
            "phone must contain only digits".to_string(),
        ));
    }
    if phone.len() != PHONE_LENGTH {
        return Err(AppError::Validation(format!(
            "phone must be {} digits",
            PHONE_LENGTH
        )));
    }

    let preferred_date = match dto.preferred_date.as_deref() {
        Some(date) if !date.is_empty() => Some(
            NaiveDate::parse_from_str(date, PREFERRED_DATE_FORMAT).map_err(|_| {
                AppError::Validation("preferred_date must be YYYY-MM-DD".to_string())
            })?,
        ),
        _ => None,
    };

    dto.validate()
        .map_err(|e| AppError::Validation(first_error_message(&e, &LIMIT_FIELD_ORDER)))?;

    Ok(preferred_date)
}

/// Intake and listing of appointment requests
pub struct AppointmentService {
    repository: Arc<dyn AppointmentRepository>,
    clock: Arc<dyn Clock>,
}

impl AppointmentService {
    pub fn new(repository: Arc<dyn AppointmentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Validate a submission and store it as a new `pending` appointment
    pub async fn submit(&self, dto: CreateAppointmentDto) -> Result<AppointmentResponseDto> {
        let preferred_date = validate_submission(&dto)?;

        let new_appointment = NewAppointment::pending(dto, preferred_date, self.clock.now());
        let appointment = self
            .repository
            .insert(&new_appointment)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create appointment: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Appointment created: id={}, service_type={}",
            appointment.id,
            appointment.service_type
        );

        Ok(appointment.into())
    }

    /// List all appointments, newest first
    pub async fn list(&self) -> Result<Vec<AppointmentResponseDto>> {
        let appointments = self.repository.list_newest_first().await.map_err(|e| {
            tracing::error!("Failed to list appointments: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(appointments.into_iter().map(|a| a.into()).collect())
    }
}
