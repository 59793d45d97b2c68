use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::appointments::models::{Appointment, NewAppointment};

/// Storage contract for appointments
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Persist one appointment atomically. On error nothing is stored.
    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, sqlx::Error>;

    /// All appointments ordered by `created_at` descending
    async fn list_newest_first(&self) -> Result<Vec<Appointment>, sqlx::Error>;
}

pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (
                name, phone, service_type, preferred_date, preferred_time,
                description, address, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, phone, service_type, preferred_date, preferred_time,
                      description, address, status, created_at
            "#,
        )
        .bind(&appointment.name)
        .bind(&appointment.phone)
        .bind(&appointment.service_type)
        .bind(appointment.preferred_date)
        .bind(&appointment.preferred_time)
        .bind(&appointment.description)
        .bind(&appointment.address)
        .bind(&appointment.status)
        .bind(appointment.created_at)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(row) => {
                tx.commit().await?;
                Ok(row)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(
                        "Rollback after failed appointment insert failed: {:?}",
                        rollback_err
                    );
                }
                Err(e)
            }
        }
    }

    async fn list_newest_first(&self) -> Result<Vec<Appointment>, sqlx::Error> {
        sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, name, phone, service_type, preferred_date, preferred_time,
                   description, address, status, created_at
            FROM appointments
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::appointments::dtos::CreateAppointmentDto;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn new_appointment(name: &str, created_at: DateTime<Utc>) -> NewAppointment {
        let dto = CreateAppointmentDto {
            name: Some(name.to_string()),
            service_type: Some("repair".to_string()),
            phone: Some("13800138000".to_string()),
            ..Default::default()
        };
        NewAppointment::pending(dto, None, created_at)
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_orders_by_created_at_descending(pool: PgPool) {
        let repository = PgAppointmentRepository::new(pool);
        let t1 = Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap();
        let t2 = t1 + Duration::minutes(5);
        let t3 = t2 + Duration::minutes(5);

        // inserted out of time order so id order and time order differ
        for (name, at) in [("second", t2), ("first", t1), ("third", t3)] {
            repository.insert(&new_appointment(name, at)).await.unwrap();
        }

        let listed = repository.list_newest_first().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
        assert_eq!(listed[0].created_at, t3);
        assert_eq!(listed[2].created_at, t1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_insert_returns_stored_row(pool: PgPool) {
        let repository = PgAppointmentRepository::new(pool);
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap();

        let stored = repository.insert(&new_appointment("A", at)).await.unwrap();

        assert!(stored.id > 0);
        assert_eq!(stored.status, "pending");
        assert_eq!(stored.address, "");
        assert_eq!(stored.preferred_date, None);
        assert_eq!(stored.created_at, at);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_failed_insert_leaves_no_row(pool: PgPool) {
        let repository = PgAppointmentRepository::new(pool);
        let mut appointment = new_appointment("A", Utc::now());
        appointment.preferred_time = "t".repeat(21);

        let result = repository.insert(&appointment).await;

        assert!(result.is_err());
        assert!(repository.list_newest_first().await.unwrap().is_empty());
    }
}
