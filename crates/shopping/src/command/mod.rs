use std::ops::Deref;

use mealplanner_shared::State;
use serde::Deserialize;
use validator::Validate;

mod create;
mod delete;
mod toggle;
mod update;

#[derive(Clone)]
pub struct Command {
    state: State,
}

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct ShoppingItemInput {
    #[validate(length(min = 1, max = 200))]
    pub item: String,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub quantity: Option<f64>,
    #[validate(length(max = 30))]
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub checked: bool,
}

impl ShoppingItemInput {
    fn normalize(mut self) -> Self {
        self.item = self.item.trim().to_owned();
        self.unit = self
            .unit
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        self
    }
}
