use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Unit price, serialized as a JSON number
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
