use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for case study
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CaseStudyResponseDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub client: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
