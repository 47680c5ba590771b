use std::sync::RwLock;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;
use crate::models::Item;
use crate::utils::time::utc_now_iso;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item store lock poisoned")]
    Poisoned,
}

/// In-memory, insertion-ordered collection of items.
///
/// Lives as long as the process; nothing is persisted. Appends take the write
/// lock so ids stay unique and order stays stable across worker threads.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<Item> {
        // A push either happened or it didn't, so a poisoned vec is still consistent
        let items = self.items.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    /// Stamp the client fields with a fresh id and timestamp, then store them.
    /// Client-supplied `id` / `created_at` are replaced.
    pub fn append(&self, mut fields: Map<String, Value>) -> Result<Item, StoreError> {
        fields.remove("id");
        fields.remove("created_at");

        let item = Item {
            id: Uuid::new_v4().to_string(),
            created_at: utc_now_iso(),
            fields,
        };

        let mut items = match self.items.write() {
            Ok(items) => items,
            Err(_) => {
                error!("Item store lock poisoned, rejecting append");
                return Err(StoreError::Poisoned);
            }
        };
        items.push(item.clone());

        Ok(item)
    }
}
