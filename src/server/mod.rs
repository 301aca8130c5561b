pub mod cors;
pub mod handlers;

use axum::{middleware, routing::get, Router};

/// Builds the full application router: welcome page, classification endpoint
/// and the permissive CORS layer wrapping both.
pub fn app_router() -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/api/classify-number", get(handlers::classify_number))
        .layer(middleware::from_fn(cors::permissive_cors))
}
