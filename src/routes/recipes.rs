use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use mealplanner_recipe::RecipeInput;
use serde::Deserialize;
use serde_json::json;

use crate::{auth::AuthUser, error::AppError, routes::AppState};

#[derive(Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

pub async fn list(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let recipes = match query.q.as_deref() {
        Some(text) => app.recipe_query.search(&user, text).await?,
        None => app.recipe_query.list(&user).await?,
    };

    Ok(Json(recipes))
}

pub async fn find(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    let Some(recipe) = app.recipe_query.find(&id, &user).await? else {
        return Err(mealplanner_shared::Error::NotFound("recipe not found".to_owned()).into());
    };

    Ok(Json(recipe))
}

#[tracing::instrument(skip_all, fields(user = %user))]
pub async fn create(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<RecipeInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = app.recipe_command.create(input, &user).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[tracing::instrument(skip_all, fields(user = %user, recipe = %id))]
pub async fn update(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
    Json(input): Json<RecipeInput>,
) -> Result<impl IntoResponse, AppError> {
    app.recipe_command.update(&id, input, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(skip_all, fields(user = %user, recipe = %id))]
pub async fn delete(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    app.recipe_command.delete(&id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn favourite(
    State(app): State<AppState>,
    AuthUser(user): AuthUser,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    let is_favourite = app.recipe_command.toggle_favourite(&id, &user).await?;

    Ok(Json(json!({ "id": id, "is_favourite": is_favourite })))
}
