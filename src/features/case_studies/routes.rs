use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::case_studies::handlers;
use crate::features::case_studies::services::CaseStudyService;

/// Create routes for the case studies feature
pub fn routes(service: Arc<CaseStudyService>) -> Router {
    Router::new()
        .route("/api/cases", get(handlers::list_case_studies))
        .with_state(service)
}
