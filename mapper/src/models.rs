//! Generic data models for the `mapper` crate.
//!
//! These types describe field maps and request payloads independently of any
//! concrete resource, so the same mapper works for every record/view pair.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sparse mapping from field name to JSON value.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// Declares the serialised field names of a record, view or request type.
///
/// Names must match what serde produces for the type, after any
/// `#[serde(rename)]`.
pub trait Schema {
    const FIELDS: &'static [&'static str];

    fn has_field(name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }
}

/// A request field that may be left out, sent as `null`, or sent with a value.
///
/// Declare fields as
/// `#[serde(default, skip_serializing_if = "Tristate::is_unset")]` so a
/// missing key deserialises to `Unset` and is dropped again on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tristate<T> {
    Unset,
    Null,
    Set(T),
}

impl<T> Tristate<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Tristate::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Tristate::Null)
    }

    /// The provided value, if any.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Tristate::Set(value) => Some(value),
            _ => None,
        }
    }

    /// Collapses to `None` when unset, `Some(None)` when null.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Tristate::Unset => None,
            Tristate::Null => Some(None),
            Tristate::Set(value) => Some(Some(value)),
        }
    }
}

impl<T> Default for Tristate<T> {
    fn default() -> Self {
        Tristate::Unset
    }
}

impl<T> From<Option<T>> for Tristate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Tristate::Set(value),
            None => Tristate::Null,
        }
    }
}

impl<T: Serialize> Serialize for Tristate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tristate::Set(value) => serializer.serialize_some(value),
            Tristate::Null | Tristate::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tristate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the key is present; a missing key takes the default.
        Option::<T>::deserialize(deserializer).map(Tristate::from)
    }
}
