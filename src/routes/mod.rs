use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use mealplanner_shared::{DateRange, State, add_days};
use serde_json::json;
use sqlx::SqlitePool;
use time::Date;

use crate::config::Config;

mod dashboard;
mod health;
mod meal_plans;
mod recipes;
mod shopping_list;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub state: State,
    pub recipe_command: mealplanner_recipe::Command,
    pub recipe_query: mealplanner_recipe::Query,
    pub mealplan_command: mealplanner_mealplan::Command,
    pub mealplan_query: mealplanner_mealplan::Query,
    pub shopping_command: mealplanner_shopping::Command,
    pub shopping_query: mealplanner_shopping::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: Config, state: State) -> Self {
        Self {
            config,
            recipe_command: mealplanner_recipe::Command::new(state.clone()),
            recipe_query: mealplanner_recipe::Query(state.clone()),
            mealplan_command: mealplanner_mealplan::Command::new(state.clone()),
            mealplan_query: mealplanner_mealplan::Query(state.clone()),
            shopping_command: mealplanner_shopping::Command::new(state.clone()),
            shopping_query: mealplanner_shopping::Query(state.clone()),
            pool: state.read_db.clone(),
            state,
        }
    }

    /// Shopping list generator configured from `[shopping]`.
    pub fn generator(&self) -> mealplanner_shopping::SqliteGenerator {
        mealplanner_shopping::sqlite_generator(&self.state)
            .scope(self.config.shopping.replace_scope)
            .timeout(self.config.shopping.generate_timeout())
    }
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

/// Missing bounds fall back to the current Sunday..Saturday week. A single
/// bound spans seven days from it.
pub fn range_or_current_week(
    start: Option<Date>,
    end: Option<Date>,
) -> mealplanner_shared::Result<DateRange> {
    match (start, end) {
        (Some(start), Some(end)) => Ok(DateRange::new(start, end)),
        (Some(start), None) => Ok(DateRange::new(start, add_days(start, 6)?)),
        (None, Some(end)) => Ok(DateRange::new(add_days(end, -6)?, end)),
        (None, None) => DateRange::current_week(),
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/dashboard", get(dashboard::page))
        .route("/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/recipes/{id}",
            get(recipes::find)
                .put(recipes::update)
                .delete(recipes::delete),
        )
        .route("/recipes/{id}/favourite", post(recipes::favourite))
        .route(
            "/meal-plans",
            get(meal_plans::list).post(meal_plans::create),
        )
        .route("/meal-plans/week", get(meal_plans::week))
        .route(
            "/meal-plans/{id}",
            get(meal_plans::find)
                .put(meal_plans::update)
                .delete(meal_plans::delete),
        )
        .route(
            "/shopping-list",
            get(shopping_list::list).post(shopping_list::create),
        )
        .route("/shopping-list/generate", post(shopping_list::generate))
        .route(
            "/shopping-list/{id}",
            put(shopping_list::update).delete(shopping_list::delete),
        )
        .route("/shopping-list/{id}/toggle", post(shopping_list::toggle))
        .fallback(fallback)
        .with_state(app_state)
}
