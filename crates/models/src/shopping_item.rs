use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub checked: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingItemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub checked: bool,
}

impl ShoppingItemInput {
    pub fn new(name: impl Into<String>, checked: bool) -> Self {
        Self { id: None, name: name.into(), checked }
    }
}

impl Record for ShoppingItem {
    type Input = ShoppingItemInput;

    const KIND: &'static str = "shopping item";

    fn id(&self) -> Uuid { self.id }

    fn input_id(input: &ShoppingItemInput) -> Option<Uuid> { input.id }

    fn from_input(id: Uuid, input: ShoppingItemInput) -> Self {
        Self { id, name: input.name, checked: input.checked }
    }

    fn apply(&mut self, input: ShoppingItemInput) {
        self.name = input.name;
        self.checked = input.checked;
    }
}
