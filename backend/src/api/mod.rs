//! Central module for organizing the application's API endpoints.
//!
//! This module acts as a top-level container for the API domains and
//! assembles them, together with the shared state and middleware, into the
//! router served by `main`.

pub mod user;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::middleware;
use crate::services::users::UserService;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .merge(user::routes::user_router())
        .layer(middleware::trace_layer())
        .with_state(state)
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
