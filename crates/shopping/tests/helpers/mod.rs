use std::{path::PathBuf, str::FromStr};

use mealplanner_mealplan::MealPlanInput;
use mealplanner_recipe::RecipeInput;
use mealplanner_shared::{
    State,
    mealplan::MealType,
    recipe::{Ingredient, Ingredients},
};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use time::Date;

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealplanner_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub async fn create_recipe(
    state: &State,
    name: impl Into<String>,
    ingredients: Vec<Ingredient>,
    user_id: &str,
) -> anyhow::Result<String> {
    let input = RecipeInput {
        name: name.into(),
        ingredients: Ingredients(ingredients),
        instructions: "Cook it.".to_owned(),
        ..Default::default()
    };

    Ok(mealplanner_recipe::Command::new(state.clone())
        .create(input, user_id)
        .await?)
}

#[allow(dead_code)]
pub async fn plan_meal(
    state: &State,
    date: Date,
    recipe_id: Option<&str>,
    user_id: &str,
) -> anyhow::Result<String> {
    let input = MealPlanInput {
        date,
        meal_type: MealType::Dinner,
        recipe_id: recipe_id.map(str::to_owned),
        notes: None,
    };

    Ok(mealplanner_mealplan::Command::new(state.clone())
        .create(input, user_id)
        .await?)
}
