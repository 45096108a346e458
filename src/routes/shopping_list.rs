use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use mealplanner_shopping::ShoppingItemInput;
use serde::Deserialize;
use serde_json::json;
use time::Date;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

#[derive(Deserialize, Default)]
pub struct GenerateInput {
    #[serde(default)]
    pub start: Option<Date>,
    #[serde(default)]
    pub end: Option<Date>,
}

#[derive(Deserialize)]
pub struct ToggleInput {
    pub checked: bool,
}

pub async fn list(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let items = app.shopping_query.list(&user).await?;

    Ok(Json(items))
}

#[tracing::instrument(skip_all, fields(user = %user))]
pub async fn create(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<ShoppingItemInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = app.shopping_command.create(input, &user).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[tracing::instrument(skip_all, fields(user = %user, item = %id))]
pub async fn update(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    Json(input): Json<ShoppingItemInput>,
) -> Result<impl IntoResponse, AppError> {
    app.shopping_command.update(&id, input, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    Json(input): Json<ToggleInput>,
) -> Result<impl IntoResponse, AppError> {
    app.shopping_command
        .toggle(&id, input.checked, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(skip_all, fields(user = %user, item = %id))]
pub async fn delete(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    app.shopping_command.delete(&id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(skip_all, fields(user = %user))]
pub async fn generate(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<GenerateInput>,
) -> Result<impl IntoResponse, AppError> {
    let range = super::range_or_current_week(input.start, input.end)?;
    let generated = app.generator().generate(Some(&user), range).await?;

    Ok(Json(generated))
}
