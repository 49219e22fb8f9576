//! Locations business logic

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::location::{CreateLocation, CreateVisit, Location, UpdateLocation, Visit},
    repository::Repository,
};

#[derive(Clone)]
pub struct LocationsService {
    repository: Repository,
}

impl LocationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all locations of a user with their visits
    pub async fn list(&self, user_id: i32) -> AppResult<Vec<Location>> {
        self.repository.locations.list_for_user(user_id).await
    }

    /// Get a single location
    pub async fn get(&self, user_id: i32, id: Uuid) -> AppResult<Location> {
        self.repository.locations.get_by_id(user_id, id).await
    }

    /// Create a new location
    pub async fn create(&self, user_id: i32, location: CreateLocation) -> AppResult<Location> {
        location.validate()?;
        self.repository.locations.create(user_id, &location).await
    }

    /// Update an existing location
    pub async fn update(
        &self,
        user_id: i32,
        id: Uuid,
        location: UpdateLocation,
    ) -> AppResult<Location> {
        location.validate()?;
        self.repository
            .locations
            .update(user_id, id, &location)
            .await
    }

    /// Delete a location
    pub async fn delete(&self, user_id: i32, id: Uuid) -> AppResult<()> {
        self.repository.locations.delete(user_id, id).await
    }

    /// Record a visit; dates must be coherent when both are present
    pub async fn add_visit(
        &self,
        user_id: i32,
        location_id: Uuid,
        visit: CreateVisit,
    ) -> AppResult<Visit> {
        if let (Some(start), Some(end)) = (visit.start_date, visit.end_date) {
            if end < start {
                return Err(AppError::BadRequest(
                    "End date cannot precede start date".to_string(),
                ));
            }
        }

        self.repository
            .locations
            .add_visit(user_id, location_id, &visit)
            .await
    }

    /// Delete a visit
    pub async fn remove_visit(
        &self,
        user_id: i32,
        location_id: Uuid,
        visit_id: Uuid,
    ) -> AppResult<()> {
        self.repository
            .locations
            .remove_visit(user_id, location_id, visit_id)
            .await
    }
}
