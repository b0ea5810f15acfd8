//! Module for core business logic services.
//!
//! Services sit between the HTTP handlers and the store and own the
//! translation between API shapes and stored records.

pub mod users;
