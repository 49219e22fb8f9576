//! Route collection model

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::enums::{DifficultyLevel, RouteType};

/// A named route built from a set of locations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Collection {
    pub id: Uuid,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub route_type: Option<RouteType>,
    pub difficulty_level: Option<DifficultyLevel>,
    /// Planned length in kilometers
    pub total_distance_km: Option<f64>,
    /// Planned cumulated ascent in meters
    pub total_elevation_gain: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Locations referenced by this route
    pub location_ids: Vec<Uuid>,
}

impl Collection {
    /// A route counts as completed once any of its locations is visited
    pub fn is_completed(&self, visited: &HashSet<Uuid>) -> bool {
        self.location_ids.iter().any(|id| visited.contains(id))
    }
}

/// Create collection request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCollection {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub route_type: Option<RouteType>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub total_distance_km: Option<f64>,
    pub total_elevation_gain: Option<f64>,
    #[serde(default)]
    pub location_ids: Vec<Uuid>,
}

/// Update collection request (missing fields keep their value)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCollection {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub route_type: Option<RouteType>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub total_distance_km: Option<f64>,
    pub total_elevation_gain: Option<f64>,
}

/// Replace the set of locations attached to a collection
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetCollectionLocations {
    pub location_ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_with(location_ids: Vec<Uuid>) -> Collection {
        Collection {
            id: Uuid::new_v4(),
            user_id: 1,
            name: "GR20".to_string(),
            description: None,
            route_type: Some(RouteType::Traverse),
            difficulty_level: Some(DifficultyLevel::VeryHard),
            total_distance_km: Some(180.0),
            total_elevation_gain: Some(11000.0),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            location_ids,
        }
    }

    #[test]
    fn test_one_visited_location_completes_the_route() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let collection = collection_with(vec![a, b]);
        let visited: HashSet<Uuid> = [b].into_iter().collect();
        assert!(collection.is_completed(&visited));
    }

    #[test]
    fn test_unvisited_route_is_not_completed() {
        let collection = collection_with(vec![Uuid::new_v4()]);
        let visited: HashSet<Uuid> = [Uuid::new_v4()].into_iter().collect();
        assert!(!collection.is_completed(&visited));
    }

    #[test]
    fn test_empty_route_is_never_completed() {
        let collection = collection_with(vec![]);
        let visited: HashSet<Uuid> = [Uuid::new_v4()].into_iter().collect();
        assert!(!collection.is_completed(&visited));
    }
}
