use utoipa::OpenApi;
use crate::models::*;

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items in creation order", body = ItemListResponse)
    )
)]
#[allow(dead_code)]
pub async fn list_items_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body(content = Object, description = "Arbitrary item fields", content_type = "application/json"),
    responses(
        (status = 201, description = "Item created successfully", body = CreateItemResponse),
        (status = 400, description = "Body missing or not a JSON object", body = ErrorResponse),
        (status = 500, description = "Unexpected server error", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        list_items_doc,
        create_item_doc,
        health_check_doc,
    ),
    components(
        schemas(Item, ItemListResponse, CreateItemResponse, HealthResponse, ErrorResponse)
    ),
    tags(
        (name = "items", description = "Item endpoints")
    )
)]
pub struct ApiDoc;
