//! Location and visit models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::enums::{DifficultyLevel, PointType};

/// A recorded stay at a location
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Visit {
    pub id: Uuid,
    pub location_id: Uuid,
    /// First day of the visit; planned visits have no date yet
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub weather_conditions: Option<String>,
}

/// Which visits mark a location as visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitPolicy {
    /// Only visits whose start date is today or earlier count
    StartedOnly,
    /// Any recorded visit counts, dated or not
    AnyRecorded,
}

impl Default for VisitPolicy {
    fn default() -> Self {
        VisitPolicy::StartedOnly
    }
}

/// A point of interest with its visit history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: Uuid,
    pub user_id: i32,
    pub name: String,
    pub point_type: PointType,
    /// Elevation in meters
    pub elevation: Option<f64>,
    pub description: Option<String>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Attached by the repository after the main query
    #[sqlx(skip)]
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl Location {
    /// Whether this location counts as visited under the given policy
    pub fn is_visited(&self, policy: VisitPolicy, today: NaiveDate) -> bool {
        match policy {
            VisitPolicy::AnyRecorded => !self.visits.is_empty(),
            VisitPolicy::StartedOnly => self
                .visits
                .iter()
                .any(|v| v.start_date.map(|d| d <= today).unwrap_or(false)),
        }
    }
}

/// Create location request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocation {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Defaults to waypoint
    pub point_type: Option<PointType>,
    pub elevation: Option<f64>,
    pub description: Option<String>,
    pub difficulty_level: Option<DifficultyLevel>,
}

/// Update location request (missing fields keep their value)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLocation {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub point_type: Option<PointType>,
    pub elevation: Option<f64>,
    pub description: Option<String>,
    pub difficulty_level: Option<DifficultyLevel>,
}

/// Record a visit at a location
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVisit {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub weather_conditions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_with_visits(starts: &[Option<NaiveDate>]) -> Location {
        let id = Uuid::new_v4();
        Location {
            id,
            user_id: 1,
            name: "Pic du Midi".to_string(),
            point_type: PointType::Summit,
            elevation: Some(2877.0),
            description: None,
            difficulty_level: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            visits: starts
                .iter()
                .map(|start| Visit {
                    id: Uuid::new_v4(),
                    location_id: id,
                    start_date: *start,
                    end_date: None,
                    notes: None,
                    weather_conditions: None,
                })
                .collect(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_visits_is_never_visited() {
        let loc = location_with_visits(&[]);
        let today = day(2024, 6, 1);
        assert!(!loc.is_visited(VisitPolicy::StartedOnly, today));
        assert!(!loc.is_visited(VisitPolicy::AnyRecorded, today));
    }

    #[test]
    fn test_started_only_respects_today_boundary() {
        let today = day(2024, 6, 1);
        let past = location_with_visits(&[Some(day(2024, 5, 30))]);
        let exact = location_with_visits(&[Some(today)]);
        let future = location_with_visits(&[Some(day(2024, 6, 2))]);
        assert!(past.is_visited(VisitPolicy::StartedOnly, today));
        assert!(exact.is_visited(VisitPolicy::StartedOnly, today));
        assert!(!future.is_visited(VisitPolicy::StartedOnly, today));
    }

    #[test]
    fn test_dateless_visit_counts_only_under_any_recorded() {
        let loc = location_with_visits(&[None]);
        let today = day(2024, 6, 1);
        assert!(!loc.is_visited(VisitPolicy::StartedOnly, today));
        assert!(loc.is_visited(VisitPolicy::AnyRecorded, today));
    }

    #[test]
    fn test_one_started_visit_is_enough() {
        let loc = location_with_visits(&[None, Some(day(2024, 9, 1)), Some(day(2024, 1, 15))]);
        assert!(loc.is_visited(VisitPolicy::StartedOnly, day(2024, 6, 1)));
    }
}
