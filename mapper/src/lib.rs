//! Core `mapper` crate for translating between stored records and API shapes.
//!
//! A [`RenameTable`] lists canonical record fields whose external name
//! differs. From that single table the crate can project a record into a
//! restricted view, turn a sparse create/patch payload back into record field
//! names, and merge such a payload over an existing record. Request payloads
//! use [`Tristate`] so "leave unchanged" and "clear" stay distinguishable.

pub mod errors;
pub mod mapping;
pub mod models;
pub mod rename;

// Re-exports for convenience
pub use errors::MapperError;
pub use mapping::{build, merge, project, to_storage_fields, Mapper};
pub use models::{FieldMap, Schema, Tristate};
pub use rename::RenameTable;
