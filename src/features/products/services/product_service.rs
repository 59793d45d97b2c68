use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::ProductResponseDto;
use crate::features::products::repositories::ProductRepository;

/// Service for the product catalog
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// List products, filtered by exact category when one is given
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<ProductResponseDto>> {
        let products = self.repository.list(category).await.map_err(|e| {
            tracing::error!("Failed to list products (category={:?}): {:?}", category, e);
            AppError::Database(e)
        })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{product, InMemoryProductRepository};

    fn service(repository: InMemoryProductRepository) -> ProductService {
        ProductService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn test_list_without_category_returns_everything() {
        let service = service(InMemoryProductRepository::new(vec![
            product(1, "Oak table", Some("furniture")),
            product(2, "Wall lamp", Some("lighting")),
            product(3, "Gift card", None),
        ]));

        let products = service.list(None).await.unwrap();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_list_filters_by_exact_category() {
        let service = service(InMemoryProductRepository::new(vec![
            product(1, "Oak table", Some("furniture")),
            product(2, "Table lamp", Some("furniture-lighting")),
            product(3, "Sofa", Some("furniture")),
            product(4, "Stool", Some("Furniture")),
        ]));

        let products = service.list(Some("furniture")).await.unwrap();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_list_surfaces_store_failure() {
        let service = service(InMemoryProductRepository::failing());

        let err = service.list(None).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
