use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::reference::SpacecraftRecord;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct SpacecraftQuery {
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/spacecraft/{id}",
    tag = "reference",
    params(
        ("id" = String, Path, description = "Numeric spacecraft id"),
        ("name" = Option<String>, Query, description = "Short name to use when the id is unknown")
    ),
    responses(
        (status = 200, description = "Spacecraft record; unknown ids yield a stand-in", body = SpacecraftRecord)
    )
)]
pub async fn get_spacecraft(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<SpacecraftQuery>,
) -> Json<SpacecraftRecord> {
    let name = query.name.unwrap_or_default();
    Json(state.pipeline.lookup_spacecraft(&id, &name))
}
