use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::products::models::Product;

/// Read access to the `products` table
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, or only those whose category equals `category` exactly
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, sqlx::Error>;
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, category, price, image_url, created_at
            FROM products
            WHERE $1::TEXT IS NULL OR category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }
}
