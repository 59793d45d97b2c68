use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::case_studies::dtos::CaseStudyResponseDto;

/// Database model for case study
#[derive(Debug, Clone, FromRow)]
pub struct CaseStudy {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub client: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CaseStudy> for CaseStudyResponseDto {
    fn from(c: CaseStudy) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            client: c.client,
            category: c.category,
            image_url: c.image_url,
            created_at: c.created_at,
        }
    }
}
