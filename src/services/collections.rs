//! Collections business logic

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::collection::{Collection, CreateCollection, UpdateCollection},
    repository::Repository,
};

#[derive(Clone)]
pub struct CollectionsService {
    repository: Repository,
}

impl CollectionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all collections of a user
    pub async fn list(&self, user_id: i32) -> AppResult<Vec<Collection>> {
        self.repository.collections.list_for_user(user_id).await
    }

    /// Get a single collection
    pub async fn get(&self, user_id: i32, id: Uuid) -> AppResult<Collection> {
        self.repository.collections.get_by_id(user_id, id).await
    }

    /// Create a new collection
    pub async fn create(&self, user_id: i32, collection: CreateCollection) -> AppResult<Collection> {
        collection.validate()?;
        self.repository
            .collections
            .create(user_id, &collection)
            .await
    }

    /// Update an existing collection
    pub async fn update(
        &self,
        user_id: i32,
        id: Uuid,
        collection: UpdateCollection,
    ) -> AppResult<Collection> {
        collection.validate()?;
        self.repository
            .collections
            .update(user_id, id, &collection)
            .await
    }

    /// Delete a collection
    pub async fn delete(&self, user_id: i32, id: Uuid) -> AppResult<()> {
        self.repository.collections.delete(user_id, id).await
    }

    /// Replace the locations attached to a collection
    pub async fn set_locations(
        &self,
        user_id: i32,
        id: Uuid,
        location_ids: &[Uuid],
    ) -> AppResult<Collection> {
        self.repository
            .collections
            .set_locations(user_id, id, location_ids)
            .await
    }
}
