//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{activities, auth, collections, geo, health, locations, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Treklog API",
        version = "1.0.0",
        description = "Travel and trekking log REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Locations
        locations::list_locations,
        locations::get_location,
        locations::create_location,
        locations::update_location,
        locations::delete_location,
        locations::add_visit,
        locations::remove_visit,
        // Collections
        collections::list_collections,
        collections::get_collection,
        collections::create_collection,
        collections::update_collection,
        collections::delete_collection,
        collections::set_collection_locations,
        // Activities
        activities::list_activities,
        activities::get_activity,
        activities::create_activity,
        activities::delete_activity,
        // Geo
        geo::mark_region_visited,
        geo::mark_city_visited,
        // Stats
        stats::get_user_stats,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::User,
            crate::models::user::RegisterRequest,
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            // Locations
            crate::models::location::Location,
            crate::models::location::Visit,
            crate::models::location::CreateLocation,
            crate::models::location::UpdateLocation,
            crate::models::location::CreateVisit,
            // Collections
            crate::models::collection::Collection,
            crate::models::collection::CreateCollection,
            crate::models::collection::UpdateCollection,
            crate::models::collection::SetCollectionLocations,
            // Activities
            crate::models::activity::Activity,
            crate::models::activity::CreateActivity,
            crate::models::activity::ActivityQuery,
            crate::models::activity::MovingTime,
            // Enums
            crate::models::enums::PointType,
            crate::models::enums::DifficultyLevel,
            crate::models::enums::RouteType,
            // Stats
            crate::models::stats::StatsResponse,
            crate::models::stats::ActivitySummary,
            crate::models::stats::CategorySummary,
            crate::models::stats::SportSummary,
            crate::models::stats::MonthlyEntry,
            crate::models::stats::TrekkingStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "locations", description = "Location and visit management"),
        (name = "collections", description = "Route collection management"),
        (name = "activities", description = "Activity tracking"),
        (name = "geo", description = "World travel tracking"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
