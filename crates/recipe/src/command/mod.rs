use std::ops::Deref;

use mealplanner_shared::{
    State,
    recipe::{Ingredients, validate_ingredients},
};
use serde::Deserialize;
use validator::Validate;

mod create;
mod delete;
mod favourite;
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
pub struct RecipeInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(custom(function = "validate_ingredients"))]
    #[serde(default)]
    pub ingredients: Ingredients,
    #[validate(length(min = 1, max = 20000))]
    pub instructions: String,
    #[validate(range(max = 10000))]
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[validate(range(max = 10000))]
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[validate(range(min = 1, max = 10000))]
    #[serde(default)]
    pub servings: Option<u32>,
    #[validate(url)]
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RecipeInput {
    /// Trim text fields and turn blank optional ones into `None`.
    fn normalize(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.instructions = self.instructions.trim().to_owned();
        self.description = blank_to_none(self.description);
        self.image_url = blank_to_none(self.image_url);
        self
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
