//! World travel business logic

use crate::{error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct GeoService {
    repository: Repository,
}

impl GeoService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Mark a reference region as visited
    pub async fn mark_region_visited(&self, user_id: i32, region_id: &str) -> AppResult<()> {
        self.repository
            .geodata
            .mark_region_visited(user_id, region_id)
            .await
    }

    /// Mark a reference city as visited, along with its region
    pub async fn mark_city_visited(&self, user_id: i32, city_id: &str) -> AppResult<()> {
        self.repository
            .geodata
            .mark_city_visited(user_id, city_id)
            .await
    }
}
