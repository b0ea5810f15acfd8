//! Module for the user API endpoints.
//!
//! Exposes listing, creation and partial update of users through renamed
//! views, plus an unfiltered listing of the stored records.

pub mod handlers;
pub mod models;
pub mod routes;
