use models::{ShoppingItem, ShoppingItemInput};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::MemoryStore;

/// Shopping list items held in memory, in insertion order.
pub struct ShoppingListStore {
    store: MemoryStore<ShoppingItem>,
}

impl Default for ShoppingListStore {
    fn default() -> Self { Self::new() }
}

impl ShoppingListStore {
    pub fn new() -> Self {
        Self { store: MemoryStore::new() }
    }

    /// Store pre-filled with a few unchecked items.
    pub fn seeded() -> Self {
        let inputs = ["beans", "tomatoes", "peppers"]
            .into_iter()
            .map(|name| ShoppingItemInput::new(name, false));
        Self { store: MemoryStore::with_inputs(inputs) }
    }

    pub async fn list(&self) -> Vec<ShoppingItem> {
        self.store.list().await
    }

    pub async fn get(&self, id: Uuid) -> Option<ShoppingItem> {
        self.store.get(id).await
    }

    pub async fn create(&self, input: ShoppingItemInput) -> ShoppingItem {
        let item = self.store.insert(input).await;
        info!(resource = "shopping_item", id = %item.id, name = %item.name, "shopping item created");
        item
    }

    pub async fn update(&self, id: Uuid, input: ShoppingItemInput) -> Result<ShoppingItem, ServiceError> {
        let item = self.store.update(id, input).await?;
        info!(resource = "shopping_item", id = %item.id, checked = item.checked, "shopping item updated");
        Ok(item)
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        let existed = self.store.remove(id).await;
        if existed {
            info!(resource = "shopping_item", %id, "shopping item deleted");
        } else {
            debug!(resource = "shopping_item", %id, "delete of unknown shopping item ignored");
        }
        existed
    }
}
