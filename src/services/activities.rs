//! Activities business logic

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::activity::{Activity, ActivityQuery, CreateActivity},
    models::sport::SportType,
    repository::Repository,
};

#[derive(Clone)]
pub struct ActivitiesService {
    repository: Repository,
}

impl ActivitiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search activities with pagination
    pub async fn search(
        &self,
        user_id: i32,
        query: &ActivityQuery,
    ) -> AppResult<(Vec<Activity>, i64)> {
        self.repository.activities.search(user_id, query).await
    }

    /// Get a single activity
    pub async fn get(&self, user_id: i32, id: Uuid) -> AppResult<Activity> {
        self.repository.activities.get_by_id(user_id, id).await
    }

    /// Create a new activity. The raw sport label is stored as-is;
    /// unknown labels still count in overall totals but stay out of
    /// the category and trekking breakdowns.
    pub async fn create(&self, user_id: i32, activity: CreateActivity) -> AppResult<Activity> {
        activity.validate()?;

        if SportType::parse(&activity.sport_type).is_none() {
            tracing::warn!(
                sport_type = %activity.sport_type,
                "Unrecognized sport type, activity will be excluded from breakdowns"
            );
        }

        self.repository.activities.create(user_id, &activity).await
    }

    /// Delete an activity
    pub async fn delete(&self, user_id: i32, id: Uuid) -> AppResult<()> {
        self.repository.activities.delete(user_id, id).await
    }
}
