//! Handler functions for the user API endpoints.
//!
//! These functions extract path and body data, delegate to
//! `services::users`, and wrap the results in JSON responses.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    Json,
};

use super::models::{UserCreate, UserPatch, UserView};
use crate::api::AppState;
use crate::database::models::UserModel;
use crate::errors::ApiError;

/// User id taken from the path; parse failures use the JSON error shape.
pub struct UserId(pub u32);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for UserId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<u32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(UserId(id))
    }
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserView>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    let view = state.users.create(request).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn patch_user(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(request): Json<UserPatch>,
) -> Result<Json<UserView>, ApiError> {
    Ok(Json(state.users.patch(user_id, request).await?))
}

/// Every stored field, including those the regular view hides.
pub async fn full_users(State(state): State<AppState>) -> Json<Vec<UserModel>> {
    Json(state.users.full().await)
}
