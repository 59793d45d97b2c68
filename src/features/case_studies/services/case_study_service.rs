use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::case_studies::dtos::CaseStudyResponseDto;
use crate::features::case_studies::repositories::CaseStudyRepository;

/// Service for published case studies
pub struct CaseStudyService {
    repository: Arc<dyn CaseStudyRepository>,
}

impl CaseStudyService {
    pub fn new(repository: Arc<dyn CaseStudyRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, category: Option<&str>) -> Result<Vec<CaseStudyResponseDto>> {
        let cases = self.repository.list(category).await.map_err(|e| {
            tracing::error!(
                "Failed to list case studies (category={:?}): {:?}",
                category,
                e
            );
            AppError::Database(e)
        })?;

        Ok(cases.into_iter().map(|c| c.into()).collect())
    }
}
