use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use super::api::error::ErrorResponse;
use super::api::snapshot::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::snapshot::get_snapshot,
        super::api::snapshot::list_dishes,
        super::api::snapshot::get_dish,
        super::api::snapshot::list_stations,
        super::api::snapshot::health,
        super::api::feed::ingest_feed,
        super::api::spacecraft::get_spacecraft,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            crate::monitor::Snapshot,
            crate::pipeline::DsnSnapshot,
            crate::dish::AntennaRecord,
            crate::dish::DishStatus,
            crate::dish::Metadata,
            crate::dish::SignalEntry,
            crate::dish::SignalDisplay,
            crate::dish::SignalType,
            crate::dish::TargetEntry,
            crate::dish::TargetDisplay,
            crate::feed::Station,
            crate::reference::Site,
            crate::reference::Source,
            crate::reference::SpacecraftRecord,
        )
    ),
    modifiers(&SecurityAddon),
    info(
        title = "DSN Monitor API",
        description = "Normalized antenna status of the deep space network",
        version = "0.1.0"
    ),
    tags(
        (name = "snapshot", description = "Normalized network view"),
        (name = "feed", description = "Feed ingestion"),
        (name = "reference", description = "Reference data lookups")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
