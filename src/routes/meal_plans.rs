use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use mealplanner_mealplan::MealPlanInput;
use mealplanner_shared::parse_date;
use serde::Deserialize;
use serde_json::json;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

#[derive(Deserialize, Default)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct WeekQuery {
    pub date: Option<String>,
}

fn parse_optional(value: Option<&str>) -> mealplanner_shared::Result<Option<time::Date>> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(parse_date)
        .transpose()
}

pub async fn list(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let start = parse_optional(query.start.as_deref())?;
    let end = parse_optional(query.end.as_deref())?;
    let range = super::range_or_current_week(start, end)?;

    let meal_plans = app.mealplan_query.list(&user, range).await?;

    Ok(Json(meal_plans))
}

pub async fn week(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<WeekQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_optional(query.date.as_deref())?.unwrap_or_else(mealplanner_shared::today);
    let week = app.mealplan_query.week(&user, date).await?;

    Ok(Json(week))
}

pub async fn find(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    let Some(meal_plan) = app.mealplan_query.find(&id, &user).await? else {
        return Err(mealplanner_shared::Error::NotFound("meal plan not found".to_owned()).into());
    };

    Ok(Json(meal_plan))
}

#[tracing::instrument(skip_all, fields(user = %user))]
pub async fn create(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<MealPlanInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = app.mealplan_command.create(input, &user).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[tracing::instrument(skip_all, fields(user = %user, meal_plan = %id))]
pub async fn update(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    Json(input): Json<MealPlanInput>,
) -> Result<impl IntoResponse, AppError> {
    app.mealplan_command.update(&id, input, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(skip_all, fields(user = %user, meal_plan = %id))]
pub async fn delete(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    app.mealplan_command.delete(&id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
