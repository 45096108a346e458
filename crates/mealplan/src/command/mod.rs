use std::ops::Deref;

use mealplanner_shared::{State, mealplan::MealType};
use serde::Deserialize;
use time::Date;
use validator::Validate;

mod create;
mod delete;
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

    /// Fails with not found unless the recipe belongs to the user.
    async fn check_recipe(
        &self,
        recipe_id: Option<&String>,
        user_id: &str,
    ) -> mealplanner_shared::Result<()> {
        let Some(recipe_id) = recipe_id else {
            return Ok(());
        };

        let exists = mealplanner_recipe::Query(self.state.clone())
            .exists(recipe_id, user_id)
            .await?;

        if !exists {
            mealplanner_shared::not_found!("recipe not found");
        }

        Ok(())
    }
}

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct MealPlanInput {
    pub date: Date,
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default)]
    pub recipe_id: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub notes: Option<String>,
}

impl MealPlanInput {
    fn normalize(mut self) -> Self {
        self.recipe_id = self
            .recipe_id
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        self.notes = self
            .notes
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        self
    }
}
