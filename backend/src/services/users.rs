//! User operations behind the HTTP handlers.
//!
//! Requests are always translated with the field mapper before they reach
//! the store, and records are always projected before they leave it.

use mapper::{Mapper, MapperError, RenameTable};
use validator::Validate;

use crate::api::user::models::{UserCreate, UserPatch, UserView, USER_RENAMES};
use crate::database::models::UserModel;
use crate::database::{queries, Database};
use crate::errors::ApiError;

pub struct UserService {
    db: Database,
    mapper: Mapper<UserModel, UserView>,
}

impl UserService {
    /// Binds the user rename table, failing if it does not fit the API models.
    pub fn new(db: Database) -> Result<Self, MapperError> {
        let mapper = Mapper::<UserModel, UserView>::new(RenameTable::new(USER_RENAMES)?)?
            .accepting::<UserCreate>()?
            .accepting::<UserPatch>()?;
        Ok(Self { db, mapper })
    }

    #[cfg(test)]
    pub fn database(&self) -> &Database {
        &self.db
    }

    pub async fn list(&self) -> Result<Vec<UserView>, ApiError> {
        queries::query_all(&self.db)
            .await
            .iter()
            .map(|user| self.mapper.project(user).map_err(ApiError::from))
            .collect()
    }

    pub async fn full(&self) -> Vec<UserModel> {
        queries::query_all(&self.db).await
    }

    pub async fn create(&self, request: UserCreate) -> Result<UserView, ApiError> {
        request.validate()?;
        let fields = self.mapper.to_storage_fields(&request)?;
        let user = queries::create(&self.db, fields).await?;
        tracing::info!(id = user.id, "created user");
        Ok(self.mapper.project(&user)?)
    }

    pub async fn patch(&self, id: u32, request: UserPatch) -> Result<UserView, ApiError> {
        request.validate()?;
        let fields = self.mapper.to_storage_fields(&request)?;
        let user = queries::patch(&self.db, id, fields).await.inspect_err(|err| {
            tracing::warn!(id, error = %err, "patch rejected");
        })?;
        tracing::info!(id, "patched user");
        Ok(self.mapper.project(&user)?)
    }
}
