use std::{path::PathBuf, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mealplanner::{
    AppState, Config,
    config::{AuthConfig, ShoppingConfig},
};
use mealplanner_shared::{State, shopping::ReplaceScope};
use serde_json::Value;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub fn test_config(scope: ReplaceScope) -> Config {
    Config {
        auth: AuthConfig {
            jwt_secret: SECRET.to_owned(),
            ..Default::default()
        },
        shopping: ShoppingConfig {
            replace_scope: scope,
            generate_timeout_secs: 10,
        },
        ..Default::default()
    }
}

pub async fn setup_test_app(path: PathBuf, scope: ReplaceScope) -> anyhow::Result<Router> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let pool = mealplanner::create_pool(&url, 1).await?;
    mealplanner::migrate(&pool).await?;

    let state = AppState::new(test_config(scope), State::single(pool));

    Ok(mealplanner::router(state))
}

pub fn token(user: &str) -> String {
    mealplanner::auth::generate_token(
        &test_config(ReplaceScope::All).auth,
        user,
        Duration::from_secs(300),
    )
    .unwrap()
}

#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(user) = user {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token(user)));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}
