use std::sync::Arc;

use crate::core::database::DatabaseCheck;
use crate::features::health::dtos::HealthResponseDto;

pub struct HealthService {
    database: Arc<dyn DatabaseCheck>,
}

impl HealthService {
    pub fn new(database: Arc<dyn DatabaseCheck>) -> Self {
        Self { database }
    }

    /// `Ok` when the database answered, `Err` carrying the failure detail otherwise
    pub async fn check(&self) -> Result<HealthResponseDto, HealthResponseDto> {
        match self.database.ping().await {
            Ok(()) => Ok(HealthResponseDto {
                status: "healthy".to_string(),
                database: "connected".to_string(),
            }),
            Err(e) => {
                tracing::warn!("Health check failed: {:?}", e);
                Err(HealthResponseDto {
                    status: "error".to_string(),
                    database: e.to_string(),
                })
            }
        }
    }
}
