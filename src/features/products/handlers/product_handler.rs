use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::products::dtos::ProductResponseDto;
use crate::features::products::services::ProductService;
use crate::shared::types::CategoryQuery;

/// List products
///
/// Returns every product, or only those in the given category (exact match).
#[utoipa::path(
    get,
    path = "/api/products",
    params(CategoryQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponseDto>),
        (status = 500, description = "Store error")
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.list(query.filter()).await?;
    Ok(Json(products))
}
