use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub ingredients: String,
}

/// Create/update payload. `id` is optional and only checked on update,
/// where it must match the id in the path.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub ingredients: String,
}

impl RecipeInput {
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), ingredients: ingredients.into() }
    }
}

impl Record for Recipe {
    type Input = RecipeInput;

    const KIND: &'static str = "recipe";

    fn id(&self) -> Uuid { self.id }

    fn input_id(input: &RecipeInput) -> Option<Uuid> { input.id }

    fn from_input(id: Uuid, input: RecipeInput) -> Self {
        Self { id, name: input.name, ingredients: input.ingredients }
    }

    fn apply(&mut self, input: RecipeInput) {
        self.name = input.name;
        self.ingredients = input.ingredients;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recipe_serializes_flat() {
        let id = Uuid::new_v4();
        let r = Recipe { id, name: "milkshake".into(), ingredients: "milk, ice cream".into() };
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v, json!({"id": id, "name": "milkshake", "ingredients": "milk, ice cream"}));
    }

    #[test]
    fn input_id_is_optional() {
        let input: RecipeInput =
            serde_json::from_value(json!({"name": "foo", "ingredients": "none"})).unwrap();
        assert_eq!(input, RecipeInput::new("foo", "none"));

        let missing = serde_json::from_value::<RecipeInput>(json!({"name": "foo"}));
        assert!(missing.is_err());
    }

    #[test]
    fn apply_keeps_id() {
        let id = Uuid::new_v4();
        let mut r = Recipe::from_input(id, RecipeInput::new("a", "b"));
        r.apply(RecipeInput { id: Some(Uuid::new_v4()), ..RecipeInput::new("foo", "none") });
        assert_eq!(r, Recipe { id, name: "foo".into(), ingredients: "none".into() });
    }
}
