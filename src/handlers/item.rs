use crate::{error::ApiError, models::{CreateItemResponse, ItemListResponse}, services::ItemStore};
use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// List all items
pub async fn list_items(
    State(store): State<Arc<ItemStore>>,
) -> (StatusCode, Json<ItemListResponse>) {
    let items = store.list();
    debug!("Listing {} items", items.len());
    (
        StatusCode::OK,
        Json(ItemListResponse {
            success: true,
            count: items.len(),
            data: items,
        }),
    )
}

/// Create a new item from an arbitrary JSON object
pub async fn create_item(
    State(store): State<Arc<ItemStore>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateItemResponse>), ApiError> {

    // Anything other than a non-empty JSON object counts as no data
    let fields = match payload {
        Ok(Json(Value::Object(fields))) if !fields.is_empty() => fields,
        Ok(Json(other)) => {
            warn!("Rejecting item body that is not a non-empty object: {}", other);
            return Err(ApiError::NoData);
        }
        Err(rejection) => {
            warn!("Rejecting item body: {}", rejection.body_text());
            return Err(ApiError::NoData);
        }
    };

    let item = store.append(fields)?;
    info!("Created item {} (store now holds {})", item.id, store.len());

    Ok((
        StatusCode::CREATED,
        Json(CreateItemResponse {
            success: true,
            data: item,
            message: "Item created successfully".to_string(),
        }),
    ))
}
