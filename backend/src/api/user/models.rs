//! Request and response shapes for the user endpoints.
//!
//! These use external field names; `USER_RENAMES` lists every field whose
//! stored name differs.

use mapper::{Schema, Tristate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::database::models::TwitchAccount;

/// Canonical record field → external field.
pub static USER_RENAMES: &[(&str, &str)] = &[("last_name", "surname")];

/// Create a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    pub first_name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    pub twitch: Tristate<TwitchAccount>,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    #[validate(custom(function = "validate_email"))]
    pub email: Tristate<String>,
}

impl Schema for UserCreate {
    const FIELDS: &'static [&'static str] = &["first_name", "surname", "twitch", "email"];
}

/// Patch a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    pub first_name: Tristate<String>,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    pub surname: Tristate<String>,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    pub twitch: Tristate<TwitchAccount>,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    #[validate(custom(function = "validate_email"))]
    pub email: Tristate<String>,
}

impl Schema for UserPatch {
    const FIELDS: &'static [&'static str] = &["first_name", "surname", "twitch", "email"];
}

/// Customized view on a `UserModel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: u32,
    pub first_name: String,
    pub surname: String,
    pub twitch: Option<TwitchAccount>,
}

impl Schema for UserView {
    const FIELDS: &'static [&'static str] = &["id", "first_name", "surname", "twitch"];
}

/// Checks a provided address; unset and null emails pass.
fn validate_email(email: &Tristate<String>) -> Result<(), ValidationError> {
    match email.as_set() {
        Some(address) if !address.validate_email() => {
            Err(ValidationError::new("email").with_message("not a valid email address".into()))
        }
        _ => Ok(()),
    }
}
