//! Projection, inversion and merging of records through a rename table.
//!
//! Records and views are moved through `serde_json` field maps, so any type
//! implementing `Serialize`/`Deserialize` and [`Schema`] can take part.
//! [`Mapper`] binds a table to a record/view pair after checking that the
//! pair actually fits, and is the entry point used by request handlers.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::MapperError;
use crate::models::{FieldMap, Schema};
use crate::rename::RenameTable;

fn to_field_map<T: Serialize>(value: &T) -> Result<FieldMap, MapperError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(MapperError::NotAnObject),
    }
}

/// Projects a record into the view `V`, renaming fields on the way.
///
/// Record fields the view does not declare are dropped.
pub fn project<M, V>(record: &M, table: &RenameTable) -> Result<V, MapperError>
where
    M: Serialize,
    V: Schema + DeserializeOwned,
{
    let mut data = to_field_map(record)?;
    for (model_field, view_field) in table.pairs() {
        if let Some(value) = data.remove(*model_field) {
            data.insert(view_field.to_string(), value);
        }
    }

    let mut view = FieldMap::new();
    for field in V::FIELDS {
        let value = data.remove(*field).ok_or_else(|| MapperError::SchemaMismatch {
            field: field.to_string(),
            reason: "no value on the record after renaming".into(),
        })?;
        view.insert(field.to_string(), value);
    }

    serde_json::from_value(Value::Object(view)).map_err(|err| MapperError::SchemaMismatch {
        field: V::FIELDS.join(", "),
        reason: err.to_string(),
    })
}

/// Translates the fields a request actually provided into record field names.
///
/// Unset request fields are absent from the result; explicit nulls are kept.
pub fn to_storage_fields<M, R>(request: &R, table: &RenameTable) -> Result<FieldMap, MapperError>
where
    M: Schema,
    R: Serialize,
{
    to_field_map(request)?
        .into_iter()
        .map(|(key, value)| {
            let canonical = table.to_canonical(&key);
            if M::has_field(canonical) {
                Ok((canonical.to_string(), value))
            } else {
                Err(MapperError::UnknownField(key))
            }
        })
        .collect()
}

/// Overwrites the fields of `existing` present in `fields`, leaving the rest.
pub fn merge<M>(existing: &M, fields: FieldMap) -> Result<M, MapperError>
where
    M: Serialize + DeserializeOwned,
{
    let mut data = to_field_map(existing)?;
    data.extend(fields);
    build(data)
}

/// Builds a complete record from a field map.
pub fn build<M: DeserializeOwned>(fields: FieldMap) -> Result<M, MapperError> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|err| MapperError::InvalidRecord(err.to_string()))
}

/// A rename table bound to a record type `M` and a view type `V`.
pub struct Mapper<M, V> {
    table: RenameTable,
    _types: PhantomData<fn() -> (M, V)>,
}

impl<M, V> Clone for Mapper<M, V> {
    fn clone(&self) -> Self {
        Self {
            table: self.table,
            _types: PhantomData,
        }
    }
}

impl<M, V> std::fmt::Debug for Mapper<M, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper").field("table", &self.table).finish()
    }
}

impl<M, V> Mapper<M, V>
where
    M: Schema + Serialize + DeserializeOwned,
    V: Schema + DeserializeOwned,
{
    /// Binds `table`, checking that every view field resolves to a record field
    /// and that no external name collides with a stored field name.
    pub fn new(table: RenameTable) -> Result<Self, MapperError> {
        for (model_field, view_field) in table.pairs() {
            if model_field != view_field && M::has_field(view_field) {
                return Err(MapperError::ShadowedField {
                    canonical: model_field.to_string(),
                    external: view_field.to_string(),
                });
            }
        }
        for field in V::FIELDS {
            let canonical = table.to_canonical(field);
            if !M::has_field(canonical) {
                return Err(MapperError::SchemaMismatch {
                    field: field.to_string(),
                    reason: format!("record has no field `{canonical}`"),
                });
            }
        }
        tracing::debug!(renames = table.pairs().len(), "bound field mapper");
        Ok(Self {
            table,
            _types: PhantomData,
        })
    }

    /// Checks that every field of the request type `R` maps onto the record.
    pub fn accepting<R: Schema>(self) -> Result<Self, MapperError> {
        for field in R::FIELDS {
            if !M::has_field(self.table.to_canonical(field)) {
                return Err(MapperError::UnknownField(field.to_string()));
            }
        }
        Ok(self)
    }

    pub fn table(&self) -> &RenameTable {
        &self.table
    }

    pub fn project(&self, record: &M) -> Result<V, MapperError> {
        project(record, &self.table)
    }

    pub fn to_storage_fields<R: Serialize>(&self, request: &R) -> Result<FieldMap, MapperError> {
        to_storage_fields::<M, R>(request, &self.table)
    }

    pub fn merge(&self, existing: &M, fields: FieldMap) -> Result<M, MapperError> {
        merge(existing, fields)
    }
}
