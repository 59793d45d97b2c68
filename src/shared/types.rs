use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Envelope used for error bodies
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl ApiResponse<()> {
    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

/// Optional `?category=` filter shared by the catalog listings
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// Exact category to match; empty is treated as absent
    pub category: Option<String>,
}

impl CategoryQuery {
    /// The category to filter on, if any
    pub fn filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_ignores_empty() {
        let query = CategoryQuery {
            category: Some(String::new()),
        };
        assert_eq!(query.filter(), None);
        assert_eq!(CategoryQuery::default().filter(), None);

        let query = CategoryQuery {
            category: Some("kitchen".to_string()),
        };
        assert_eq!(query.filter(), Some("kitchen"));
    }

    #[test]
    fn test_error_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::error(
            Some("name is required".to_string()),
            Some(vec!["name is required".to_string()]),
        ))
        .unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "name is required");
        assert!(body["data"].is_null());
    }
}
