//! Custom error types specific to the `mapper` crate.
//!
//! Configuration errors (`SchemaMismatch`, `UnknownField`, `DuplicateRename`,
//! `ShadowedField`) mean a rename table does not fit the types it is bound to
//! and should be caught at startup. `InvalidRecord` means the supplied values cannot form a
//! record and is the only variant a well-configured mapper returns at runtime.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("view field `{field}` cannot be resolved: {reason}")]
    SchemaMismatch { field: String, reason: String },

    #[error("field `{0}` has no counterpart on the record")]
    UnknownField(String),

    #[error("field `{0}` appears more than once in the rename table")]
    DuplicateRename(String),

    #[error("external name `{external}` for `{canonical}` is already a record field")]
    ShadowedField { canonical: String, external: String },

    #[error("fields do not form a valid record: {0}")]
    InvalidRecord(String),

    #[error("value did not serialise to a JSON object")]
    NotAnObject,

    #[error("serialisation failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MapperError {
    /// Whether the error is caused by caller supplied values rather than by
    /// a misconfigured mapper.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, MapperError::InvalidRecord(_))
    }
}
