use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::case_studies::models::CaseStudy;

/// Read access to the `case_studies` table
#[async_trait]
pub trait CaseStudyRepository: Send + Sync {
    async fn list(&self, category: Option<&str>) -> Result<Vec<CaseStudy>, sqlx::Error>;
}

pub struct PgCaseStudyRepository {
    pool: PgPool,
}

impl PgCaseStudyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CaseStudyRepository for PgCaseStudyRepository {
    async fn list(&self, category: Option<&str>) -> Result<Vec<CaseStudy>, sqlx::Error> {
        sqlx::query_as::<_, CaseStudy>(
            r#"
            SELECT id, title, description, client, category, image_url, created_at
            FROM case_studies
            WHERE $1::TEXT IS NULL OR category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }
}
