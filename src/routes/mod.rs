pub mod api;
pub mod cors;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::{config::Config, docs::ApiDoc, services::ItemStore};

pub use api::create_api_routes;
pub use cors::cors_layer;

/// Full application: API routes, Swagger UI, CORS and request tracing
pub fn create_app(config: &Config, store: Arc<ItemStore>) -> Router {
    Router::new()
        .merge(create_api_routes(store))
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(config.cors_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
}
