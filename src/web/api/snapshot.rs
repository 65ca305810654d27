use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::dish::AntennaRecord;
use crate::feed::Station;
use crate::monitor::Snapshot;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::AppState;

#[utoipa::path(
    get,
    path = "/api/snapshot",
    tag = "snapshot",
    responses(
        (status = 200, description = "Latest normalized snapshot", body = Snapshot)
    )
)]
pub async fn get_snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.store.snapshot().await)
}

#[utoipa::path(
    get,
    path = "/api/dishes",
    tag = "snapshot",
    responses(
        (status = 200, description = "Every roster antenna, ranked by status", body = Vec<AntennaRecord>)
    )
)]
pub async fn list_dishes(State(state): State<AppState>) -> Json<Vec<AntennaRecord>> {
    Json(state.store.snapshot().await.data.dishes)
}

#[utoipa::path(
    get,
    path = "/api/dishes/{name}",
    tag = "snapshot",
    params(
        ("name" = String, Path, description = "Antenna name, e.g. DSS14")
    ),
    responses(
        (status = 200, description = "Antenna record", body = AntennaRecord),
        (status = 404, description = "Antenna not in roster", body = ErrorResponse)
    )
)]
pub async fn get_dish(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<AntennaRecord>> {
    state
        .store
        .snapshot()
        .await
        .data
        .dishes
        .into_iter()
        .find(|d| d.name == name)
        .map(Json)
        .ok_or(ApiError::NotFound("dish_not_found"))
}

#[utoipa::path(
    get,
    path = "/api/stations",
    tag = "snapshot",
    responses(
        (status = 200, description = "Stations reported by the latest feed", body = Vec<Station>)
    )
)]
pub async fn list_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    Json(state.store.snapshot().await.data.stations)
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub refreshes: u64,
    pub failures: u64,
    pub unknown_spacecraft: u64,
    pub received_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "snapshot",
    responses(
        (status = 200, description = "Refresh and diagnostic counters", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let counters = state.store.counters().await;
    let received_at = state.store.snapshot().await.received_at;

    Json(HealthResponse {
        refreshes: counters.refreshes,
        failures: counters.failures,
        unknown_spacecraft: state.diagnostics.unknown_spacecraft_count(),
        received_at,
    })
}
