use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealplanner_shared::Error;
use serde_json::json;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] Error),

    #[error("missing or invalid credentials")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized | AppError::Domain(Error::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Domain(Error::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            AppError::Domain(Error::Validate(errors)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, errors.to_string())
            }
            AppError::Domain(Error::User(msg)) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Domain(Error::Timeout) => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),
            AppError::Domain(Error::Server(msg)) => {
                tracing::error!("Server error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
            AppError::Domain(Error::Unknown(err)) => {
                tracing::error!("Unexpected error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                AppError::Domain(Error::Unauthenticated),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::Domain(Error::NotFound("recipe not found".to_owned())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Domain(Error::User("invalid date".to_owned())),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::Domain(Error::Timeout), StatusCode::GATEWAY_TIMEOUT),
            (
                AppError::Domain(Error::Server("boom".to_owned())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
