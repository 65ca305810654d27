use axum::{extract::FromRef, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::diagnostics::LogDiagnostics;
use crate::feed::FileSource;
use crate::monitor::{Refresher, SnapshotStore};
use crate::pipeline::Pipeline;

use super::api::feed as feed_handlers;
use super::api::snapshot as snapshot_handlers;
use super::api::spacecraft as spacecraft_handlers;
use super::api_doc::ApiDoc;
use super::config::{Config, ConfigError};

/// Shared by every handler: configuration, the processing pipeline and the
/// latest published snapshot.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Pipeline,
    pub store: SnapshotStore,
    pub diagnostics: Arc<LogDiagnostics>,
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

pub fn build_state(config: Config) -> Result<AppState, ConfigError> {
    let reference = Arc::new(config.load_reference()?);
    log::info!(
        "reference data: {} antennas, {} spacecraft",
        reference.antennas().len(),
        reference.spacecraft_count()
    );

    let diagnostics = Arc::new(LogDiagnostics::new());
    let pipeline = Pipeline::new(reference, diagnostics.clone(), config.display.order);
    let store = SnapshotStore::new(pipeline.initial_snapshot());

    Ok(AppState {
        config: Arc::new(config),
        pipeline,
        store,
        diagnostics,
    })
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/snapshot", get(snapshot_handlers::get_snapshot))
        .route("/api/dishes", get(snapshot_handlers::list_dishes))
        .route("/api/dishes/{name}", get(snapshot_handlers::get_dish))
        .route("/api/stations", get(snapshot_handlers::list_stations))
        .route("/api/health", get(snapshot_handlers::health))
        .route("/api/feed", post(feed_handlers::ingest_feed))
        .route(
            "/api/spacecraft/{id}",
            get(spacecraft_handlers::get_spacecraft),
        )
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState) -> std::io::Result<()> {
    let bind_addr = state.config.web.bind.clone();

    let mut refresher = Refresher::new(state.pipeline.clone(), state.store.clone());
    if let Some(ref feed) = state.config.feed {
        log::info!(
            "refreshing feed from {} every {}",
            feed.path.display(),
            humantime::format_duration(feed.refresh_interval)
        );
        if let Err(e) = refresher.start(FileSource::new(feed.path.clone()), feed.refresh_interval)
        {
            log::warn!("Failed to start feed refresher: {}", e);
        }
    }

    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    let result = axum::serve(listener, app).await;

    refresher.stop().await;
    result
}
