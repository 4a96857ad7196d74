use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marquee_catalog::FilterParseError;
use marquee_core::{CoreError, SelectionGuardViolation, ValidationError};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(ValidationError),
    SelectionError(SelectionGuardViolation),
    BadRequestError(String),
    NotFoundError(String),
    ConflictError(String),
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationError(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": err.to_string(), "issues": err.issues }),
            ),
            AppError::SelectionError(err) => (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": err.to_string() })),
            AppError::BadRequestError(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Internal Server Error" }))
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Internal Server Error" }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(err) => AppError::ValidationError(err),
            CoreError::SelectionGuard(err) => AppError::SelectionError(err),
            CoreError::NotFound(_) => AppError::NotFoundError(err.to_string()),
            CoreError::InvalidTransition { .. } => AppError::ConflictError(err.to_string()),
            CoreError::OutOfRange { .. } => AppError::BadRequestError(err.to_string()),
            CoreError::Collaborator(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<SelectionGuardViolation> for AppError {
    fn from(err: SelectionGuardViolation) -> Self {
        AppError::SelectionError(err)
    }
}

impl From<FilterParseError> for AppError {
    fn from(err: FilterParseError) -> Self {
        AppError::BadRequestError(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Anyhow(err)
    }
}
