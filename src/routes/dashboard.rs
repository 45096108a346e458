use axum::{Json, extract::State, response::IntoResponse};
use mealplanner_mealplan::MealPlanView;
use mealplanner_recipe::RecipeView;
use mealplanner_shopping::ShoppingStats;
use serde::Serialize;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

const RECENT_RECIPES: u64 = 3;
const UPCOMING_MEALS: u32 = 3;

#[derive(Serialize)]
pub struct Dashboard {
    pub recipe_count: i64,
    pub recent_recipes: Vec<RecipeView>,
    pub upcoming_meals: Vec<MealPlanView>,
    pub shopping: ShoppingStats,
}

pub async fn page(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let today = mealplanner_shared::today();

    let (recipe_count, recent_recipes, upcoming_meals, shopping) = futures::try_join!(
        app.recipe_query.count(&user),
        app.recipe_query.recent(&user, RECENT_RECIPES),
        app.mealplan_query.upcoming(&user, today, UPCOMING_MEALS),
        app.shopping_query.stats(&user),
    )?;

    Ok(Json(Dashboard {
        recipe_count,
        recent_recipes,
        upcoming_meals,
        shopping,
    }))
}
