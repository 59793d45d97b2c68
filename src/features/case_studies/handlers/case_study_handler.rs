use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::case_studies::dtos::CaseStudyResponseDto;
use crate::features::case_studies::services::CaseStudyService;
use crate::shared::types::CategoryQuery;

/// List case studies
#[utoipa::path(
    get,
    path = "/api/cases",
    params(CategoryQuery),
    responses(
        (status = 200, description = "List of case studies", body = Vec<CaseStudyResponseDto>),
        (status = 500, description = "Store error")
    ),
    tag = "cases"
)]
pub async fn list_case_studies(
    State(service): State<Arc<CaseStudyService>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<CaseStudyResponseDto>>> {
    let cases = service.list(query.filter()).await?;
    Ok(Json(cases))
}
