//! Main entry point for the user API backend.
//!
//! This file loads settings, initializes logging, builds the in-memory
//! store and the user service (validating its field mapping), and serves the
//! axum router until the process is stopped.

mod api;
mod config;
mod database;
mod errors;
mod middleware;
mod services;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::Settings;
use crate::database::Database;
use crate::services::users::UserService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::new().context("failed to load settings")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter)),
        )
        .init();

    let db = Database::new(&settings.users);
    if settings.users.seed_demo {
        db.seed_demo().await;
    }
    let users = UserService::new(db).context("user field mapping does not fit the API models")?;

    let app = api::router(AppState {
        users: Arc::new(users),
    });

    let addr = settings.server.addr().context("invalid server address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
