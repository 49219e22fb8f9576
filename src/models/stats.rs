//! Statistics response types

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::enums::DifficultyLevel;

/// Aggregated metrics over a set of activities.
///
/// Sums and maxima ignore missing values; averages run over the
/// activities that carry the metric. All distances are kilometers,
/// elevations meters, speeds km/h and moving time whole seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivitySummary {
    pub count: i64,
    pub total_distance: f64,
    pub total_moving_time: i64,
    pub total_elevation_gain: f64,
    pub total_elevation_loss: f64,
    pub avg_distance: f64,
    pub max_distance: f64,
    pub avg_elevation_gain: f64,
    pub max_elevation_gain: f64,
    pub avg_speed: f64,
    pub max_speed: f64,
    pub total_calories: f64,
}

/// Reduced per-sport totals inside a category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SportSummary {
    pub count: i64,
    pub total_distance: f64,
    pub total_elevation_gain: f64,
}

/// Category block: full metrics plus a per-sport breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub totals: ActivitySummary,
    pub sports: IndexMap<String, SportSummary>,
}

/// One month of hiking activity, keyed "YYYY-MM"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyEntry {
    pub month: String,
    pub count: i64,
    pub distance: f64,
    pub elevation: f64,
}

/// Trekking-focused summary combining activities, locations and routes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrekkingStats {
    pub total_hikes: i64,
    pub total_km_hiked: f64,
    pub total_elevation_gain: f64,
    /// Cumulated moving time of hikes, in hours
    pub total_hiking_hours: f64,
    pub avg_hike_distance_km: f64,
    pub longest_hike_km: f64,
    pub avg_elevation_gain: f64,
    pub max_elevation_gain: f64,
    /// Visited locations marked as summits
    pub summits_reached: i64,
    /// Visited locations of any point type
    pub trails_hiked: i64,
    /// Routes with at least one visited location
    pub routes_completed: i64,
    pub total_routes: i64,
    pub total_trails: i64,
    /// Hike counts per route difficulty, ordered by severity
    pub difficulty_breakdown: BTreeMap<DifficultyLevel, i64>,
    /// Dated hikes grouped by month, chronological
    pub monthly_stats: Vec<MonthlyEntry>,
}

/// Full dashboard statistics payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub location_count: i64,
    pub visited_location_count: i64,
    pub trips_count: i64,
    pub visited_city_count: i64,
    pub total_cities: i64,
    pub visited_region_count: i64,
    pub total_regions: i64,
    pub visited_country_count: i64,
    pub total_countries: i64,
    pub activities_overall: ActivitySummary,
    /// Only categories with at least one activity appear, in fixed
    /// presentation order
    pub activities_by_category: IndexMap<String, CategorySummary>,
    pub trekking: TrekkingStats,
    // Flat mirrors kept for older dashboard clients
    pub activity_distance: f64,
    pub activity_moving_time: i64,
    pub activity_elevation: f64,
    pub activity_count: i64,
}
