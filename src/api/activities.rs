//! Activity endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::activity::{Activity, ActivityQuery, CreateActivity},
};

use super::AuthenticatedUser;

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items
    pub items: Vec<T>,
    /// Total number of items
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}

/// List activities with optional sport filter and pagination
#[utoipa::path(
    get,
    path = "/activities",
    tag = "activities",
    security(("bearer_auth" = [])),
    params(
        ("sport_type" = Option<String>, Query, description = "Filter by raw sport label"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 50)")
    ),
    responses(
        (status = 200, description = "List of activities", body = PaginatedResponse<Activity>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_activities(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<ActivityQuery>,
) -> AppResult<Json<PaginatedResponse<Activity>>> {
    let (activities, total) = state.services.activities.search(claims.user_id, &query).await?;

    Ok(Json(PaginatedResponse {
        items: activities,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(50),
    }))
}

/// Get a single activity
#[utoipa::path(
    get,
    path = "/activities/{id}",
    tag = "activities",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Activity ID")
    ),
    responses(
        (status = 200, description = "Activity details", body = Activity),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn get_activity(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Activity>> {
    let activity = state.services.activities.get(claims.user_id, id).await?;
    Ok(Json(activity))
}

/// Record a new activity
#[utoipa::path(
    post,
    path = "/activities",
    tag = "activities",
    security(("bearer_auth" = [])),
    request_body = CreateActivity,
    responses(
        (status = 201, description = "Activity recorded", body = Activity),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_activity(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(activity): Json<CreateActivity>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    let created = state
        .services
        .activities
        .create(claims.user_id, activity)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete an activity
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    tag = "activities",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Activity ID")
    ),
    responses(
        (status = 204, description = "Activity deleted"),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn delete_activity(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.activities.delete(claims.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
