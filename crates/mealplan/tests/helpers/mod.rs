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
    user_id: &str,
) -> anyhow::Result<String> {
    let input = RecipeInput {
        name: name.into(),
        description: Some("weeknight favourite".to_owned()),
        ingredients: Ingredients(vec![
            Ingredient::new("Eggs", 2.0, "pcs"),
            Ingredient::new("Milk", 200.0, "ml"),
        ]),
        instructions: "Whisk and cook.".to_owned(),
        prep_time: Some(5),
        cook_time: Some(10),
        servings: Some(2),
        image_url: None,
    };

    Ok(mealplanner_recipe::Command::new(state.clone())
        .create(input, user_id)
        .await?)
}

#[allow(dead_code)]
pub fn meal_plan_input(date: Date, meal_type: MealType, recipe_id: Option<&str>) -> MealPlanInput {
    MealPlanInput {
        date,
        meal_type,
        recipe_id: recipe_id.map(str::to_owned),
        notes: None,
    }
}
