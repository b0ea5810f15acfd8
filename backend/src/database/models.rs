//! Rust structs that represent stored records.
//!
//! These models define the structure of data as it is kept by the store.
//! Note that they differ from the API models in `api::user::models`; the
//! field mapper translates between the two.

use mapper::Schema;
use serde::{Deserialize, Serialize};

/// Linked Twitch account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TwitchAccount {
    pub twitch_id: Option<String>,
    pub twitch_username: Option<String>,
}

/// Full user object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub twitch: Option<TwitchAccount>,
    pub email: Option<String>,
}

impl Schema for UserModel {
    const FIELDS: &'static [&'static str] = &["id", "first_name", "last_name", "twitch", "email"];
}
