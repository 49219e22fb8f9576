//! World travel endpoints
//!
//! Regions and cities are reference data shared by all users; these
//! endpoints only record which of them the caller has visited.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Mark a region as visited
#[utoipa::path(
    post,
    path = "/geo/regions/{id}/visit",
    tag = "geo",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Region ID")
    ),
    responses(
        (status = 204, description = "Region marked as visited"),
        (status = 404, description = "Region not found")
    )
)]
pub async fn mark_region_visited(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .services
        .geo
        .mark_region_visited(claims.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a city as visited
#[utoipa::path(
    post,
    path = "/geo/cities/{id}/visit",
    tag = "geo",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "City ID")
    ),
    responses(
        (status = 204, description = "City marked as visited"),
        (status = 404, description = "City not found")
    )
)]
pub async fn mark_city_visited(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .services
        .geo
        .mark_city_visited(claims.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
