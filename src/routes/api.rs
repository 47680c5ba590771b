use crate::{handlers::{create_item, health_check, list_items}, services::ItemStore};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(store: Arc<ItemStore>) -> Router {
    Router::<Arc<ItemStore>>::new()
        .route("/items", get(list_items).post(create_item))
        .route("/health", get(health_check))
        .with_state(store)
}
