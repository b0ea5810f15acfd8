//! Global application error types and handlers.
//!
//! `ApiError` is returned by services and handlers and converted into an
//! HTTP response in one place, so every endpoint reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mapper::MapperError;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::database::DatabaseError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("record not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Mapper(#[from] MapperError),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(_) => ApiError::NotFound,
            DatabaseError::Mapper(err) => ApiError::Mapper(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Validation(detail) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Mapper(err) if err.is_invalid_input() => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": err.to_string() })),
            )
                .into_response(),
            ApiError::Mapper(err) => {
                tracing::error!(error = %err, "field mapping failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
