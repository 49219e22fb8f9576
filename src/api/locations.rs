//! Location and visit endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::location::{CreateLocation, CreateVisit, Location, UpdateLocation, Visit},
};

use super::AuthenticatedUser;

/// List the caller's locations with their visits
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of locations", body = Vec<Location>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_locations(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Location>>> {
    let locations = state.services.locations.list(claims.user_id).await?;
    Ok(Json(locations))
}

/// Get a single location
#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = "locations",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location details", body = Location),
        (status = 404, description = "Location not found")
    )
)]
pub async fn get_location(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Location>> {
    let location = state.services.locations.get(claims.user_id, id).await?;
    Ok(Json(location))
}

/// Create a new location
#[utoipa::path(
    post,
    path = "/locations",
    tag = "locations",
    security(("bearer_auth" = [])),
    request_body = CreateLocation,
    responses(
        (status = 201, description = "Location created", body = Location),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_location(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(location): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    let created = state.services.locations.create(claims.user_id, location).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing location
#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = "locations",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Location ID")
    ),
    request_body = UpdateLocation,
    responses(
        (status = 200, description = "Location updated", body = Location),
        (status = 404, description = "Location not found")
    )
)]
pub async fn update_location(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(location): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    let updated = state
        .services
        .locations
        .update(claims.user_id, id, location)
        .await?;
    Ok(Json(updated))
}

/// Delete a location and its visits
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = "locations",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Location ID")
    ),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn delete_location(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.locations.delete(claims.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record a visit to a location
#[utoipa::path(
    post,
    path = "/locations/{id}/visits",
    tag = "locations",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Location ID")
    ),
    request_body = CreateVisit,
    responses(
        (status = 201, description = "Visit recorded", body = Visit),
        (status = 400, description = "End date precedes start date"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn add_visit(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(visit): Json<CreateVisit>,
) -> AppResult<(StatusCode, Json<Visit>)> {
    let created = state
        .services
        .locations
        .add_visit(claims.user_id, id, visit)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a recorded visit
#[utoipa::path(
    delete,
    path = "/locations/{id}/visits/{visit_id}",
    tag = "locations",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Location ID"),
        ("visit_id" = Uuid, Path, description = "Visit ID")
    ),
    responses(
        (status = 204, description = "Visit deleted"),
        (status = 404, description = "Visit not found")
    )
)]
pub async fn remove_visit(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path((id, visit_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state
        .services
        .locations
        .remove_visit(claims.user_id, id, visit_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
