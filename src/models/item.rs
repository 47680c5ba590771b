use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A stored item: server-generated identity plus whatever fields the client sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: String,
    pub created_at: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Response for listing all items
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemListResponse {
    pub success: bool,
    pub data: Vec<Item>,
    pub count: usize,
}

/// Response for creating an item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItemResponse {
    pub success: bool,
    pub data: Item,
    pub message: String,
}
