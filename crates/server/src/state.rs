use std::sync::Arc;

use service::{RecipeStore, ShoppingListStore};

/// Stores shared by every handler. Each store carries its own lock.
#[derive(Clone)]
pub struct ServerState {
    pub recipes: Arc<RecipeStore>,
    pub shopping_list: Arc<ShoppingListStore>,
}

impl ServerState {
    pub fn new(recipes: Arc<RecipeStore>, shopping_list: Arc<ShoppingListStore>) -> Self {
        Self { recipes, shopping_list }
    }

    /// Stores pre-filled with the default fixtures.
    pub fn seeded() -> Self {
        Self::new(Arc::new(RecipeStore::seeded()), Arc::new(ShoppingListStore::seeded()))
    }

    pub fn empty() -> Self {
        Self::new(Arc::new(RecipeStore::new()), Arc::new(ShoppingListStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::RecipeInput;

    #[tokio::test]
    async fn cloned_state_shares_stores() {
        let state = ServerState::empty();
        let handler_copy = state.clone();
        let rec = handler_copy.recipes.create(RecipeInput::new("toast", "bread")).await;
        assert_eq!(state.recipes.list().await, vec![rec]);
        assert!(Arc::ptr_eq(&state.shopping_list, &handler_copy.shopping_list));
    }

    #[tokio::test]
    async fn seeded_state_is_not_empty() {
        let state = ServerState::seeded();
        assert!(!state.recipes.list().await.is_empty());
        assert!(!state.shopping_list.list().await.is_empty());
    }
}
