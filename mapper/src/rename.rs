//! Static rename tables between canonical record fields and external names.

use std::collections::HashSet;

use crate::errors::MapperError;

/// Pairs of `(canonical, external)` field names.
///
/// Both directions are answered from the same pairs, so a rename added for
/// views is automatically honoured when reading requests.
#[derive(Debug, Clone, Copy)]
pub struct RenameTable {
    pairs: &'static [(&'static str, &'static str)],
}

impl RenameTable {
    /// Builds a table, rejecting any name used twice on either side.
    pub fn new(pairs: &'static [(&'static str, &'static str)]) -> Result<Self, MapperError> {
        let mut canonical = HashSet::new();
        let mut external = HashSet::new();
        for (model_field, view_field) in pairs {
            if !canonical.insert(*model_field) {
                return Err(MapperError::DuplicateRename(model_field.to_string()));
            }
            if !external.insert(*view_field) {
                return Err(MapperError::DuplicateRename(view_field.to_string()));
            }
        }
        Ok(Self { pairs })
    }

    /// A table that renames nothing.
    pub const fn identity() -> Self {
        Self { pairs: &[] }
    }

    pub fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.pairs
    }

    /// External name for a canonical field; unmapped names pass through.
    pub fn to_external<'a>(&self, canonical: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(model_field, _)| *model_field == canonical)
            .map_or(canonical, |(_, view_field)| *view_field)
    }

    /// Canonical name for an external field; unmapped names pass through.
    pub fn to_canonical<'a>(&self, external: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(_, view_field)| *view_field == external)
            .map_or(external, |(model_field, _)| *model_field)
    }
}
