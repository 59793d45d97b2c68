use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

/// Fallback router serving files from `static_dir`
pub fn routes(static_dir: impl AsRef<Path>) -> Router {
    Router::new().fallback_service(ServeDir::new(static_dir))
}
