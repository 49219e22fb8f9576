//! Treklog Server - Travel & Trekking Log
//!
//! A REST API server for logging travels and outdoor activities.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use treklog_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("treklog_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Treklog Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone(), config.stats.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Locations
        .route("/locations", get(api::locations::list_locations))
        .route("/locations", post(api::locations::create_location))
        .route("/locations/:id", get(api::locations::get_location))
        .route("/locations/:id", put(api::locations::update_location))
        .route("/locations/:id", delete(api::locations::delete_location))
        .route("/locations/:id/visits", post(api::locations::add_visit))
        .route(
            "/locations/:id/visits/:visit_id",
            delete(api::locations::remove_visit),
        )
        // Collections
        .route("/collections", get(api::collections::list_collections))
        .route("/collections", post(api::collections::create_collection))
        .route("/collections/:id", get(api::collections::get_collection))
        .route("/collections/:id", put(api::collections::update_collection))
        .route("/collections/:id", delete(api::collections::delete_collection))
        .route(
            "/collections/:id/locations",
            put(api::collections::set_collection_locations),
        )
        // Activities
        .route("/activities", get(api::activities::list_activities))
        .route("/activities", post(api::activities::create_activity))
        .route("/activities/:id", get(api::activities::get_activity))
        .route("/activities/:id", delete(api::activities::delete_activity))
        // World travel
        .route("/geo/regions/:id/visit", post(api::geo::mark_region_visited))
        .route("/geo/cities/:id/visit", post(api::geo::mark_city_visited))
        // Statistics
        .route("/stats/:username", get(api::stats::get_user_stats))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
