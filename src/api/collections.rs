//! Route collection endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::collection::{
        Collection, CreateCollection, SetCollectionLocations, UpdateCollection,
    },
};

use super::AuthenticatedUser;

/// List the caller's route collections
#[utoipa::path(
    get,
    path = "/collections",
    tag = "collections",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of collections", body = Vec<Collection>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_collections(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Collection>>> {
    let collections = state.services.collections.list(claims.user_id).await?;
    Ok(Json(collections))
}

/// Get a single collection
#[utoipa::path(
    get,
    path = "/collections/{id}",
    tag = "collections",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Collection details", body = Collection),
        (status = 404, description = "Collection not found")
    )
)]
pub async fn get_collection(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Collection>> {
    let collection = state.services.collections.get(claims.user_id, id).await?;
    Ok(Json(collection))
}

/// Create a new collection
#[utoipa::path(
    post,
    path = "/collections",
    tag = "collections",
    security(("bearer_auth" = [])),
    request_body = CreateCollection,
    responses(
        (status = 201, description = "Collection created", body = Collection),
        (status = 400, description = "Invalid input or unknown location")
    )
)]
pub async fn create_collection(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(collection): Json<CreateCollection>,
) -> AppResult<(StatusCode, Json<Collection>)> {
    let created = state
        .services
        .collections
        .create(claims.user_id, collection)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing collection
#[utoipa::path(
    put,
    path = "/collections/{id}",
    tag = "collections",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    request_body = UpdateCollection,
    responses(
        (status = 200, description = "Collection updated", body = Collection),
        (status = 404, description = "Collection not found")
    )
)]
pub async fn update_collection(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(collection): Json<UpdateCollection>,
) -> AppResult<Json<Collection>> {
    let updated = state
        .services
        .collections
        .update(claims.user_id, id, collection)
        .await?;
    Ok(Json(updated))
}

/// Delete a collection
#[utoipa::path(
    delete,
    path = "/collections/{id}",
    tag = "collections",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    responses(
        (status = 204, description = "Collection deleted"),
        (status = 404, description = "Collection not found")
    )
)]
pub async fn delete_collection(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.collections.delete(claims.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the locations attached to a collection
#[utoipa::path(
    put,
    path = "/collections/{id}/locations",
    tag = "collections",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    request_body = SetCollectionLocations,
    responses(
        (status = 200, description = "Collection locations replaced", body = Collection),
        (status = 400, description = "One or more locations do not exist"),
        (status = 404, description = "Collection not found")
    )
)]
pub async fn set_collection_locations(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<SetCollectionLocations>,
) -> AppResult<Json<Collection>> {
    let updated = state
        .services
        .collections
        .set_locations(claims.user_id, id, &request.location_ids)
        .await?;
    Ok(Json(updated))
}
