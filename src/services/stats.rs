//! Statistics aggregation engine
//!
//! Pure reducers over an in-memory snapshot of one user's records. The
//! service fetches everything once, aggregates, and assembles the full
//! dashboard payload; any storage failure fails the whole call.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::activity::Activity,
    models::collection::Collection,
    models::enums::{DifficultyLevel, PointType},
    models::location::{Location, VisitPolicy},
    models::sport::{Category, SportType},
    models::stats::{
        ActivitySummary, CategorySummary, MonthlyEntry, SportSummary, StatsResponse, TrekkingStats,
    },
    models::user::User,
    repository::geodata::GeoCounters,
    repository::Repository,
};

/// Round to two decimals, the precision of every reported float
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sum_of(activities: &[&Activity], field: impl Fn(&Activity) -> Option<f64>) -> f64 {
    activities.iter().copied().filter_map(&field).sum()
}

/// Mean over the activities that carry the metric, zero when none do
fn avg_of(activities: &[&Activity], field: impl Fn(&Activity) -> Option<f64>) -> f64 {
    let values: Vec<f64> = activities.iter().copied().filter_map(&field).collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn max_of(activities: &[&Activity], field: impl Fn(&Activity) -> Option<f64>) -> f64 {
    activities
        .iter()
        .copied()
        .filter_map(&field)
        .fold(0.0, f64::max)
}

/// Full metric block over a set of activities.
///
/// Missing metrics never contribute: sums and maxima skip them,
/// averages run over the carriers only. Rounding happens here and
/// nowhere earlier.
pub fn aggregate_activities<'a>(
    activities: impl IntoIterator<Item = &'a Activity>,
) -> ActivitySummary {
    let activities: Vec<&Activity> = activities.into_iter().collect();

    let total_moving = activities
        .iter()
        .filter_map(|a| a.moving_time)
        .fold(chrono::Duration::zero(), |acc, mt| acc + mt.0);

    ActivitySummary {
        count: activities.len() as i64,
        total_distance: round2(sum_of(&activities, |a| a.distance)),
        total_moving_time: total_moving.num_seconds(),
        total_elevation_gain: round2(sum_of(&activities, |a| a.elevation_gain)),
        total_elevation_loss: round2(sum_of(&activities, |a| a.elevation_loss)),
        avg_distance: round2(avg_of(&activities, |a| a.distance)),
        max_distance: round2(max_of(&activities, |a| a.distance)),
        avg_elevation_gain: round2(avg_of(&activities, |a| a.elevation_gain)),
        max_elevation_gain: round2(max_of(&activities, |a| a.elevation_gain)),
        avg_speed: round2(avg_of(&activities, |a| a.average_speed)),
        max_speed: round2(max_of(&activities, |a| a.max_speed)),
        total_calories: round2(sum_of(&activities, |a| a.calories)),
    }
}

/// Category blocks in fixed presentation order.
///
/// Activities with an unrecognized sport label are left out entirely;
/// categories without a single activity do not appear.
pub fn categorize_activities<'a>(
    activities: impl IntoIterator<Item = &'a Activity>,
) -> IndexMap<String, CategorySummary> {
    let typed: Vec<(SportType, &Activity)> = activities
        .into_iter()
        .filter_map(|a| a.sport().map(|s| (s, a)))
        .collect();

    let mut result = IndexMap::new();

    for category in Category::ALL {
        let members: Vec<(SportType, &Activity)> = typed
            .iter()
            .filter(|(sport, _)| sport.category() == category)
            .copied()
            .collect();
        if members.is_empty() {
            continue;
        }

        let totals = aggregate_activities(members.iter().map(|(_, a)| *a));

        // Sports keep first-seen order within the category
        let mut sports: IndexMap<String, SportSummary> = IndexMap::new();
        for (sport, activity) in &members {
            let entry = sports.entry(sport.as_str().to_string()).or_default();
            entry.count += 1;
            entry.total_distance += activity.distance.unwrap_or(0.0);
            entry.total_elevation_gain += activity.elevation_gain.unwrap_or(0.0);
        }
        for summary in sports.values_mut() {
            summary.total_distance = round2(summary.total_distance);
            summary.total_elevation_gain = round2(summary.total_elevation_gain);
        }

        result.insert(
            category.as_str().to_string(),
            CategorySummary { totals, sports },
        );
    }

    result
}

/// Month buckets over dated activities, ascending. Undated activities
/// are skipped, months without activity do not appear.
pub fn monthly_series<'a>(activities: impl IntoIterator<Item = &'a Activity>) -> Vec<MonthlyEntry> {
    let mut buckets: BTreeMap<(i32, u32), (i64, f64, f64)> = BTreeMap::new();

    for activity in activities {
        if let Some(date) = activity.date {
            let bucket = buckets
                .entry((date.year(), date.month()))
                .or_insert((0, 0.0, 0.0));
            bucket.0 += 1;
            bucket.1 += activity.distance.unwrap_or(0.0);
            bucket.2 += activity.elevation_gain.unwrap_or(0.0);
        }
    }

    buckets
        .into_iter()
        .map(|((year, month), (count, distance, elevation))| MonthlyEntry {
            month: format!("{:04}-{:02}", year, month),
            count,
            distance: round2(distance),
            elevation: round2(elevation),
        })
        .collect()
}

/// The hiking-focused block combining activities, locations and routes
pub fn trekking_summary(
    activities: &[Activity],
    locations: &[Location],
    collections: &[Collection],
    policy: VisitPolicy,
    today: NaiveDate,
) -> TrekkingStats {
    let hikes: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.sport().map(|s| s.is_hiking()).unwrap_or(false))
        .collect();

    let hike_totals = aggregate_activities(hikes.iter().copied());

    let visited: HashSet<Uuid> = locations
        .iter()
        .filter(|l| l.is_visited(policy, today))
        .map(|l| l.id)
        .collect();

    let summits_reached = locations
        .iter()
        .filter(|l| l.point_type == PointType::Summit && visited.contains(&l.id))
        .count() as i64;

    let routes_completed = collections
        .iter()
        .filter(|c| c.is_completed(&visited))
        .count() as i64;

    let mut difficulty_breakdown: BTreeMap<DifficultyLevel, i64> = BTreeMap::new();
    for collection in collections {
        if let Some(level) = collection.difficulty_level {
            *difficulty_breakdown.entry(level).or_insert(0) += 1;
        }
    }

    TrekkingStats {
        total_hikes: hike_totals.count,
        total_km_hiked: hike_totals.total_distance,
        total_elevation_gain: hike_totals.total_elevation_gain,
        total_hiking_hours: round2(hike_totals.total_moving_time as f64 / 3600.0),
        avg_hike_distance_km: hike_totals.avg_distance,
        longest_hike_km: hike_totals.max_distance,
        avg_elevation_gain: hike_totals.avg_elevation_gain,
        max_elevation_gain: hike_totals.max_elevation_gain,
        summits_reached,
        trails_hiked: visited.len() as i64,
        routes_completed,
        total_routes: collections.len() as i64,
        total_trails: locations.len() as i64,
        difficulty_breakdown,
        monthly_stats: monthly_series(hikes.iter().copied()),
    }
}

/// Assemble the complete dashboard payload from one snapshot
pub fn assemble_stats(
    activities: &[Activity],
    locations: &[Location],
    collections: &[Collection],
    geo: GeoCounters,
    policy: VisitPolicy,
    today: NaiveDate,
) -> StatsResponse {
    let activities_overall = aggregate_activities(activities.iter());
    let activities_by_category = categorize_activities(activities.iter());
    let trekking = trekking_summary(activities, locations, collections, policy, today);

    StatsResponse {
        location_count: locations.len() as i64,
        visited_location_count: trekking.trails_hiked,
        trips_count: collections.len() as i64,
        visited_city_count: geo.visited_city_count,
        total_cities: geo.total_cities,
        visited_region_count: geo.visited_region_count,
        total_regions: geo.total_regions,
        visited_country_count: geo.visited_country_count,
        total_countries: geo.total_countries,
        activity_distance: activities_overall.total_distance,
        activity_moving_time: activities_overall.total_moving_time,
        activity_elevation: activities_overall.total_elevation_gain,
        activity_count: activities_overall.count,
        activities_overall,
        activities_by_category,
        trekking,
    }
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
    visit_policy: VisitPolicy,
}

impl StatsService {
    pub fn new(repository: Repository, visit_policy: VisitPolicy) -> Self {
        Self {
            repository,
            visit_policy,
        }
    }

    /// Compute the dashboard statistics for a resolved profile
    pub async fn get_stats(&self, target: &User) -> AppResult<StatsResponse> {
        let activities = self.repository.activities.list_for_user(target.id).await?;
        let locations = self.repository.locations.list_for_user(target.id).await?;
        let collections = self.repository.collections.list_for_user(target.id).await?;
        let geo = self.repository.geodata.counters_for_user(target.id).await?;

        let today = Utc::now().date_naive();

        Ok(assemble_stats(
            &activities,
            &locations,
            &collections,
            geo,
            self.visit_policy,
            today,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::MovingTime;
    use crate::models::enums::RouteType;
    use crate::models::location::Visit;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        day(2024, 6, 15)
    }

    fn activity(sport: &str) -> Activity {
        Activity {
            id: Uuid::new_v4(),
            user_id: 1,
            name: None,
            sport_type: sport.to_string(),
            distance: None,
            elevation_gain: None,
            elevation_loss: None,
            average_speed: None,
            max_speed: None,
            calories: None,
            moving_time: None,
            date: None,
            created_at: Utc::now(),
        }
    }

    fn hike(distance: f64, elevation: f64) -> Activity {
        let mut a = activity("Hike");
        a.distance = Some(distance);
        a.elevation_gain = Some(elevation);
        a
    }

    fn dated(mut a: Activity, y: i32, m: u32, d: u32) -> Activity {
        a.date = Some(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap());
        a
    }

    fn location(point_type: PointType) -> Location {
        Location {
            id: Uuid::new_v4(),
            user_id: 1,
            name: "Spot".to_string(),
            point_type,
            elevation: None,
            description: None,
            difficulty_level: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            visits: Vec::new(),
        }
    }

    fn visited_location(point_type: PointType, start: NaiveDate) -> Location {
        let mut l = location(point_type);
        l.visits.push(Visit {
            id: Uuid::new_v4(),
            location_id: l.id,
            start_date: Some(start),
            end_date: None,
            notes: None,
            weather_conditions: None,
        });
        l
    }

    fn collection(difficulty: Option<DifficultyLevel>, location_ids: Vec<Uuid>) -> Collection {
        Collection {
            id: Uuid::new_v4(),
            user_id: 1,
            name: "Route".to_string(),
            description: None,
            route_type: Some(RouteType::Linear),
            difficulty_level: difficulty,
            total_distance_km: None,
            total_elevation_gain: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            location_ids,
        }
    }

    #[test]
    fn test_empty_input_aggregates_to_zero() {
        let summary = aggregate_activities([]);
        assert_eq!(summary, ActivitySummary::default());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_distance, 0.0);
    }

    #[test]
    fn test_single_hike_scenario() {
        let mut a = dated(hike(10.555, 500.0), 2024, 3, 15);
        a.moving_time = Some(MovingTime::from_seconds(3661));
        let activities = vec![a];

        let overall = aggregate_activities(activities.iter());
        assert_eq!(overall.total_distance, 10.56);
        assert_eq!(overall.total_moving_time, 3661);
        assert_eq!(overall.avg_distance, 10.56);
        assert_eq!(overall.max_distance, 10.56);

        let trekking = trekking_summary(&activities, &[], &[], VisitPolicy::StartedOnly, today());
        assert_eq!(trekking.total_hikes, 1);
        assert_eq!(trekking.total_km_hiked, 10.56);
        assert_eq!(
            trekking.monthly_stats,
            vec![MonthlyEntry {
                month: "2024-03".to_string(),
                count: 1,
                distance: 10.56,
                elevation: 500.0,
            }]
        );
    }

    #[test]
    fn test_moving_time_sums_whole_seconds() {
        let mut a = hike(5.0, 0.0);
        a.moving_time = Some(MovingTime::from_seconds(3600));
        let mut b = hike(6.0, 0.0);
        b.moving_time = Some(MovingTime::from_seconds(61));
        let c = hike(7.0, 0.0);

        let summary = aggregate_activities([&a, &b, &c]);
        assert_eq!(summary.total_moving_time, 3661);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_averages_run_over_carriers_only() {
        let a = hike(10.0, 0.0);
        let mut b = hike(0.0, 0.0);
        b.distance = None;

        let summary = aggregate_activities([&a, &b]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg_distance, 10.0);
        assert_eq!(summary.total_distance, 10.0);
    }

    #[test]
    fn test_category_map_is_sparse_and_ordered() {
        let activities = vec![activity("Ride"), hike(12.0, 300.0), activity("Quidditch")];

        let by_category = categorize_activities(activities.iter());
        let keys: Vec<&String> = by_category.keys().collect();
        assert_eq!(keys, vec!["hiking", "cycling"]);

        // Unknown labels still count in the overall block
        let overall = aggregate_activities(activities.iter());
        assert_eq!(overall.count, 3);
    }

    #[test]
    fn test_sports_keep_first_seen_order() {
        let activities = vec![
            activity("TrailRun"),
            hike(8.0, 200.0),
            activity("TrailRun"),
        ];

        let by_category = categorize_activities(activities.iter());
        let hiking = &by_category["hiking"];
        assert_eq!(hiking.totals.count, 3);

        let sports: Vec<&String> = hiking.sports.keys().collect();
        assert_eq!(sports, vec!["TrailRun", "Hike"]);
        assert_eq!(hiking.sports["TrailRun"].count, 2);
        assert_eq!(hiking.sports["Hike"].count, 1);
        assert_eq!(hiking.sports["Hike"].total_distance, 8.0);
    }

    #[test]
    fn test_monthly_series_is_sparse_ascending() {
        let activities = vec![
            dated(hike(10.0, 100.0), 2024, 3, 20),
            dated(hike(5.0, 50.0), 2024, 1, 2),
            dated(hike(2.5, 25.0), 2024, 3, 1),
            hike(99.0, 999.0), // undated, skipped
        ];

        let series = monthly_series(activities.iter());
        assert_eq!(
            series,
            vec![
                MonthlyEntry {
                    month: "2024-01".to_string(),
                    count: 1,
                    distance: 5.0,
                    elevation: 50.0,
                },
                MonthlyEntry {
                    month: "2024-03".to_string(),
                    count: 2,
                    distance: 12.5,
                    elevation: 125.0,
                },
            ]
        );
    }

    #[test]
    fn test_summit_counts_as_summit_and_trail() {
        let summit = visited_location(PointType::Summit, day(2024, 5, 1));
        let trekking = trekking_summary(&[], &[summit], &[], VisitPolicy::StartedOnly, today());
        assert_eq!(trekking.summits_reached, 1);
        assert_eq!(trekking.trails_hiked, 1);
        assert_eq!(trekking.total_trails, 1);
    }

    #[test]
    fn test_unvisited_summit_is_not_reached() {
        let summit = location(PointType::Summit);
        let trekking = trekking_summary(&[], &[summit], &[], VisitPolicy::StartedOnly, today());
        assert_eq!(trekking.summits_reached, 0);
        assert_eq!(trekking.trails_hiked, 0);
        assert_eq!(trekking.total_trails, 1);
    }

    #[test]
    fn test_route_with_one_visited_location_counts_once() {
        let visited = visited_location(PointType::Waypoint, day(2024, 5, 1));
        let unvisited = location(PointType::Waypoint);
        let route = collection(None, vec![visited.id, unvisited.id]);

        let trekking = trekking_summary(
            &[],
            &[visited, unvisited],
            &[route],
            VisitPolicy::StartedOnly,
            today(),
        );
        assert_eq!(trekking.routes_completed, 1);
        assert_eq!(trekking.total_routes, 1);
    }

    #[test]
    fn test_completed_never_exceeds_totals() {
        let a = visited_location(PointType::Waypoint, day(2024, 2, 1));
        let b = visited_location(PointType::Summit, day(2024, 3, 1));
        let c = location(PointType::Refuge);
        let done = collection(None, vec![a.id, b.id]);
        let pending = collection(None, vec![c.id]);

        let trekking = trekking_summary(
            &[],
            &[a, b, c],
            &[done, pending],
            VisitPolicy::StartedOnly,
            today(),
        );
        assert!(trekking.routes_completed <= trekking.total_routes);
        assert!(trekking.trails_hiked <= trekking.total_trails);
        assert_eq!(trekking.routes_completed, 1);
        assert_eq!(trekking.trails_hiked, 2);
    }

    #[test]
    fn test_difficulty_breakdown_skips_unrated_and_orders_by_severity() {
        let collections = vec![
            collection(Some(DifficultyLevel::VeryHard), vec![]),
            collection(Some(DifficultyLevel::Easy), vec![]),
            collection(None, vec![]),
            collection(Some(DifficultyLevel::Easy), vec![]),
        ];

        let trekking =
            trekking_summary(&[], &[], &collections, VisitPolicy::StartedOnly, today());

        let levels: Vec<DifficultyLevel> = trekking.difficulty_breakdown.keys().copied().collect();
        assert_eq!(
            levels,
            vec![DifficultyLevel::Easy, DifficultyLevel::VeryHard]
        );
        assert_eq!(trekking.difficulty_breakdown[&DifficultyLevel::Easy], 2);
        assert_eq!(trekking.difficulty_breakdown[&DifficultyLevel::VeryHard], 1);
    }

    #[test]
    fn test_hiking_hours_conversion() {
        let mut a = hike(10.0, 100.0);
        a.moving_time = Some(MovingTime::from_seconds(5400));
        let trekking = trekking_summary(&[a], &[], &[], VisitPolicy::StartedOnly, today());
        assert_eq!(trekking.total_hiking_hours, 1.5);
    }

    #[test]
    fn test_non_hiking_sports_stay_out_of_trekking() {
        let activities = vec![hike(10.0, 100.0), activity("Ride"), activity("Swim")];
        let trekking =
            trekking_summary(&activities, &[], &[], VisitPolicy::StartedOnly, today());
        assert_eq!(trekking.total_hikes, 1);
        assert_eq!(trekking.total_km_hiked, 10.0);
    }

    #[test]
    fn test_visit_policy_flows_through_assembly() {
        let future = visited_location(PointType::Summit, day(2024, 12, 1));
        let locations = vec![future];

        let strict = assemble_stats(
            &[],
            &locations,
            &[],
            GeoCounters::default(),
            VisitPolicy::StartedOnly,
            today(),
        );
        assert_eq!(strict.visited_location_count, 0);
        assert_eq!(strict.trekking.summits_reached, 0);

        let lenient = assemble_stats(
            &[],
            &locations,
            &[],
            GeoCounters::default(),
            VisitPolicy::AnyRecorded,
            today(),
        );
        assert_eq!(lenient.visited_location_count, 1);
        assert_eq!(lenient.trekking.summits_reached, 1);
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let activities = vec![dated(hike(10.555, 500.0), 2024, 3, 15), activity("Ride")];
        let locations = vec![visited_location(PointType::Summit, day(2024, 5, 1))];
        let collections = vec![collection(
            Some(DifficultyLevel::Hard),
            vec![locations[0].id],
        )];

        let first = assemble_stats(
            &activities,
            &locations,
            &collections,
            GeoCounters::default(),
            VisitPolicy::StartedOnly,
            today(),
        );
        let second = assemble_stats(
            &activities,
            &locations,
            &collections,
            GeoCounters::default(),
            VisitPolicy::StartedOnly,
            today(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_legacy_mirrors_match_overall_block() {
        let mut a = hike(21.1, 800.0);
        a.moving_time = Some(MovingTime::from_seconds(7200));
        let activities = vec![a, activity("Ride")];

        let response = assemble_stats(
            &activities,
            &[],
            &[],
            GeoCounters::default(),
            VisitPolicy::StartedOnly,
            today(),
        );
        assert_eq!(response.activity_count, response.activities_overall.count);
        assert_eq!(
            response.activity_distance,
            response.activities_overall.total_distance
        );
        assert_eq!(
            response.activity_moving_time,
            response.activities_overall.total_moving_time
        );
        assert_eq!(
            response.activity_elevation,
            response.activities_overall.total_elevation_gain
        );
        assert_eq!(
            response.visited_location_count,
            response.trekking.trails_hiked
        );
    }

    #[test]
    fn test_empty_snapshot_assembles_to_zeros() {
        let response = assemble_stats(
            &[],
            &[],
            &[],
            GeoCounters::default(),
            VisitPolicy::StartedOnly,
            today(),
        );
        assert_eq!(response.location_count, 0);
        assert_eq!(response.trips_count, 0);
        assert_eq!(response.activities_overall, ActivitySummary::default());
        assert!(response.activities_by_category.is_empty());
        assert_eq!(response.trekking, TrekkingStats::default());
    }
}
