use models::{Recipe, RecipeInput};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::MemoryStore;

/// Recipes held in memory, in insertion order.
pub struct RecipeStore {
    store: MemoryStore<Recipe>,
}

impl Default for RecipeStore {
    fn default() -> Self { Self::new() }
}

impl RecipeStore {
    /// Empty store.
    pub fn new() -> Self {
        Self { store: MemoryStore::new() }
    }

    /// Store pre-filled with the default recipes.
    pub fn seeded() -> Self {
        let inputs = [
            RecipeInput::new("boiled white rice", "1 cup white rice, 2 cups water, pinch of salt"),
            RecipeInput::new("milkshake", "2 tbsp cocoa, 2 cups vanilla ice cream, 1 cup milk"),
        ];
        Self { store: MemoryStore::with_inputs(inputs) }
    }

    pub async fn list(&self) -> Vec<Recipe> {
        self.store.list().await
    }

    pub async fn get(&self, id: Uuid) -> Option<Recipe> {
        self.store.get(id).await
    }

    pub async fn create(&self, input: RecipeInput) -> Recipe {
        let rec = self.store.insert(input).await;
        info!(resource = "recipe", id = %rec.id, name = %rec.name, "recipe created");
        rec
    }

    /// Replace name and ingredients of an existing recipe.
    pub async fn update(&self, id: Uuid, input: RecipeInput) -> Result<Recipe, ServiceError> {
        let rec = self.store.update(id, input).await?;
        info!(resource = "recipe", id = %rec.id, "recipe updated");
        Ok(rec)
    }

    /// Remove a recipe; returns whether it existed.
    pub async fn delete(&self, id: Uuid) -> bool {
        let existed = self.store.remove(id).await;
        if existed {
            info!(resource = "recipe", %id, "recipe deleted");
        } else {
            debug!(resource = "recipe", %id, "delete of unknown recipe ignored");
        }
        existed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_is_not_empty() {
        let store = RecipeStore::seeded();
        let list = store.list().await;
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "boiled white rice");
    }

    #[tokio::test]
    async fn recipe_store_crud() -> Result<(), anyhow::Error> {
        let store = RecipeStore::seeded();

        // create
        let input = RecipeInput::new("beans and rice", "tomatoes, beans, peppers, green onion");
        let created = store.create(input.clone()).await;
        assert_eq!(created.name, input.name);
        assert_eq!(created.ingredients, input.ingredients);
        let list = store.list().await;
        assert_eq!(list.iter().filter(|r| **r == created).count(), 1);
        assert_eq!(list.last(), Some(&created));

        // update first
        let first = list[0].clone();
        let updated = store.update(first.id, RecipeInput::new("foo", "none")).await?;
        assert_eq!(updated, Recipe { id: first.id, name: "foo".into(), ingredients: "none".into() });
        assert_eq!(store.get(first.id).await, Some(updated));

        // delete
        assert!(store.delete(first.id).await);
        assert!(store.get(first.id).await.is_none());
        assert_eq!(store.list().await.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_mismatched_body_id() {
        let store = RecipeStore::seeded();
        let first = store.list().await[0].clone();
        let input = RecipeInput { id: Some(Uuid::new_v4()), ..RecipeInput::new("foo", "none") };
        let res = store.update(first.id, input).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert_eq!(store.get(first.id).await, Some(first));
    }

    #[tokio::test]
    async fn update_accepts_matching_body_id() -> Result<(), anyhow::Error> {
        let store = RecipeStore::seeded();
        let first = store.list().await[0].clone();
        let input = RecipeInput { id: Some(first.id), ..RecipeInput::new("foo", "none") };
        let updated = store.update(first.id, input).await?;
        assert_eq!(updated.name, "foo");
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_unknown_id() {
        let store = RecipeStore::new();
        let missing = Uuid::new_v4();
        let res = store.update(missing, RecipeInput::new("foo", "none")).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert!(!store.delete(missing).await);
        assert!(store.list().await.is_empty());
    }
}
