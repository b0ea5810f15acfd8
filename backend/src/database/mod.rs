//! In-memory record store for users.
//!
//! Records live in a map keyed by id behind a single async mutex; every
//! read-modify-write (id assignment, merge and re-store) holds the lock for
//! its whole duration, so concurrent requests never hand out the same id.

pub mod models;
pub mod queries;

use std::collections::BTreeMap;

use mapper::{FieldMap, MapperError};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config;
use models::UserModel;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("user {0} does not exist")]
    NotFound(u32),

    #[error(transparent)]
    Mapper(#[from] MapperError),
}

pub struct Database {
    users: Mutex<BTreeMap<u32, UserModel>>,
    /// Values for optional fields a create request leaves out.
    defaults: FieldMap,
}

impl Database {
    pub fn new(settings: &config::Users) -> Self {
        let mut defaults = FieldMap::new();
        defaults.insert("twitch".into(), Value::Null);
        defaults.insert("email".into(), Value::String(settings.default_email.clone()));
        Self {
            users: Mutex::new(BTreeMap::new()),
            defaults,
        }
    }

    /// Inserts the demo user, replacing whatever holds id 1.
    pub async fn seed_demo(&self) {
        let donny = UserModel {
            id: 1,
            first_name: "Donny".into(),
            last_name: "Kerabatsos".into(),
            twitch: None,
            email: Some("donny@dudeism.com".into()),
        };
        self.users.lock().await.insert(donny.id, donny);
    }
}
