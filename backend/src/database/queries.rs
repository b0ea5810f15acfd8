//! Database query functions (Data Access Objects).
//!
//! This module centralizes all store operations. Callers pass field maps that
//! already use record field names; renaming from API names happens in the
//! user service before anything reaches this layer.

use mapper::FieldMap;

use super::models::UserModel;
use super::{Database, DatabaseError};

/// Snapshot of all users in insertion order.
pub async fn query_all(db: &Database) -> Vec<UserModel> {
    db.users.lock().await.values().cloned().collect()
}

#[cfg(test)]
pub async fn find(db: &Database, id: u32) -> Option<UserModel> {
    db.users.lock().await.get(&id).cloned()
}

/// Creates a user with the next free id.
///
/// Fields not given fall back to the store defaults.
pub async fn create(db: &Database, fields: FieldMap) -> Result<UserModel, DatabaseError> {
    let mut users = db.users.lock().await;
    let id = users.keys().next_back().map_or(1, |last| last + 1);

    let mut data = db.defaults.clone();
    data.extend(fields);
    data.insert("id".into(), id.into());

    let user: UserModel = mapper::build(data)?;
    users.insert(id, user.clone());
    tracing::debug!(id, "stored new user");
    Ok(user)
}

/// Merges `fields` over the user with `id`. An `id` key in `fields` is ignored.
pub async fn patch(db: &Database, id: u32, mut fields: FieldMap) -> Result<UserModel, DatabaseError> {
    let mut users = db.users.lock().await;
    let existing = users.get_mut(&id).ok_or(DatabaseError::NotFound(id))?;

    fields.remove("id");
    let updated = mapper::merge(&*existing, fields)?;
    *existing = updated.clone();
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn fields(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    async fn seeded() -> Database {
        let db = Database::new(&config::Users::default());
        db.seed_demo().await;
        db
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_defaults() {
        let db = seeded().await;
        let user = create(&db, fields(json!({ "first_name": "Walter", "last_name": "Sobchak" })))
            .await
            .unwrap();

        assert_eq!(user.id, 2);
        assert_eq!(user.twitch, None);
        assert_eq!(user.email.as_deref(), Some("jeff@dudeism.com"));
        assert_eq!(query_all(&db).await.len(), 2);
    }

    #[tokio::test]
    async fn create_in_empty_store_starts_at_one() {
        let db = Database::new(&config::Users::default());
        let user = create(&db, fields(json!({ "first_name": "Maude", "last_name": "Lebowski" })))
            .await
            .unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn create_uses_configured_default_email() {
        let settings = config::Users {
            default_email: "nobody@example.com".into(),
            seed_demo: false,
        };
        let db = Database::new(&settings);
        let user = create(&db, fields(json!({ "first_name": "Bunny", "last_name": "Lebowski" })))
            .await
            .unwrap();
        assert_eq!(user.email.as_deref(), Some("nobody@example.com"));
    }

    #[tokio::test]
    async fn create_keeps_explicit_null_email() {
        let db = seeded().await;
        let user = create(
            &db,
            fields(json!({ "first_name": "Jesus", "last_name": "Quintana", "email": null })),
        )
        .await
        .unwrap();
        assert_eq!(user.email, None);
    }

    #[tokio::test]
    async fn ids_are_distinct_and_increasing() {
        let db = seeded().await;
        let mut ids = Vec::new();
        for name in ["Walter", "Maude", "Bunny", "Brandt"] {
            let user = create(&db, fields(json!({ "first_name": name, "last_name": "X" })))
                .await
                .unwrap();
            ids.push(user.id);
        }
        assert_eq!(ids, vec![2, 3, 4, 5]);

        let listed: Vec<u32> = query_all(&db).await.iter().map(|u| u.id).collect();
        assert_eq!(listed, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn concurrent_creates_never_share_an_id() {
        let db = std::sync::Arc::new(seeded().await);
        let handles: Vec<_> = (0..16)
            .map(|n| {
                let db = db.clone();
                tokio::spawn(async move {
                    create(&db, fields(json!({ "first_name": format!("U{n}"), "last_name": "X" })))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[tokio::test]
    async fn patch_merges_over_existing() {
        let db = seeded().await;
        let user = patch(&db, 1, fields(json!({ "last_name": "Lebowski" }))).await.unwrap();

        assert_eq!(user.last_name, "Lebowski");
        assert_eq!(user.first_name, "Donny");
        assert_eq!(find(&db, 1).await, Some(user));
    }

    #[tokio::test]
    async fn patch_cannot_change_id() {
        let db = seeded().await;
        let user = patch(&db, 1, fields(json!({ "id": 7 }))).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(find(&db, 7).await, None);
    }

    #[tokio::test]
    async fn patch_missing_id_is_not_found() {
        let db = seeded().await;
        let before = query_all(&db).await;
        let err = patch(&db, 99, fields(json!({ "last_name": "Lebowski" }))).await.unwrap_err();

        assert!(matches!(err, DatabaseError::NotFound(99)));
        assert_eq!(query_all(&db).await, before);
    }

    #[tokio::test]
    async fn rejected_patch_leaves_store_untouched() {
        let db = seeded().await;
        let before = find(&db, 1).await;
        let err = patch(&db, 1, fields(json!({ "first_name": null }))).await.unwrap_err();

        assert!(matches!(err, DatabaseError::Mapper(_)));
        assert_eq!(find(&db, 1).await, before);
    }
}
