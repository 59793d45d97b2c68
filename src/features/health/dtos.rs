use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    /// `healthy` or `error`
    pub status: String,
    /// `connected`, or the store error detail
    pub database: String,
}
