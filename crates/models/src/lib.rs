//! Record types served by the kitchen API.
//! - `Recipe` and `ShoppingItem` are the stored records.
//! - `*Input` types are the request payloads used for create/update.

pub mod record;
pub mod recipe;
pub mod shopping_item;

pub use record::Record;
pub use recipe::{Recipe, RecipeInput};
pub use shopping_item::{ShoppingItem, ShoppingItemInput};
