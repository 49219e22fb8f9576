//! Statistics endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::stats::StatsResponse};

use super::OptionalUser;

/// Dashboard statistics for a profile.
///
/// Anyone can request a public profile; a user always sees their own.
/// Private profiles of other users answer 404 just like unknown names.
#[utoipa::path(
    get,
    path = "/stats/{username}",
    tag = "stats",
    params(
        ("username" = String, Path, description = "Profile username")
    ),
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse),
        (status = 401, description = "Invalid token supplied"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_stats(
    State(state): State<crate::AppState>,
    OptionalUser(claims): OptionalUser,
    Path(username): Path<String>,
) -> AppResult<Json<StatsResponse>> {
    let acting = claims.as_ref().map(|c| c.sub.as_str());
    let target = state.services.users.resolve_target(acting, &username).await?;
    let stats = state.services.stats.get_stats(&target).await?;
    Ok(Json(stats))
}
