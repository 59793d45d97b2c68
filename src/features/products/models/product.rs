use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::features::products::dtos::ProductResponseDto;

/// Database model for product
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            category: p.category,
            price: p.price,
            image_url: p.image_url,
            created_at: p.created_at,
        }
    }
}
