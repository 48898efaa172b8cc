//! Service layer holding the in-memory resource stores.
//! - `storage` provides the generic ordered store shared by every resource.
//! - `recipes` and `shopping_list` wrap it with per-resource rules and seed data.

pub mod errors;
pub mod storage;
pub mod recipes;
pub mod shopping_list;

pub use recipes::RecipeStore;
pub use shopping_list::ShoppingListStore;
