use axum::{extract::State, Json};

use crate::monitor::Snapshot;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::auth::{require_permission, AuthenticatedUser};
use crate::web::AppState;
use crate::web::config::Permission;

#[utoipa::path(
    post,
    path = "/api/feed",
    tag = "feed",
    request_body(content = String, content_type = "application/xml"),
    responses(
        (status = 200, description = "Feed applied", body = Snapshot),
        (status = 400, description = "Malformed feed, previous snapshot kept", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("api_key" = []))
)]
pub async fn ingest_feed(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: String,
) -> ApiResult<Json<Snapshot>> {
    require_permission(&user, Permission::IngestFeed)?;

    let result = state.pipeline.process(&body);
    let snapshot = state.store.apply(result).await.map_err(|e| {
        log::warn!("rejected feed from {}: {}", user.name, e);
        e
    })?;

    log::info!(
        "feed from {} applied (timestamp {})",
        user.name,
        snapshot.data.timestamp
    );
    Ok(Json(snapshot))
}
