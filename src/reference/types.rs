use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tracking complex hosting an antenna.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
pub enum Site {
    Goldstone,
    Canberra,
    Madrid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Source {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpacecraftRecord {
    pub id: String,
    pub short_name: String,
    pub long_name: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

pub const UNKNOWN_SPACECRAFT: &str = "UNKNOWN";

impl SpacecraftRecord {
    /// Stand-in for a spacecraft the reference table does not know.
    pub fn unknown(id: &str, short_name: &str) -> Self {
        Self {
            id: id.to_string(),
            short_name: short_name.to_string(),
            long_name: UNKNOWN_SPACECRAFT.to_string(),
            sources: Vec::new(),
        }
    }
}

/// One roster entry: an antenna and the site it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntennaAssignment {
    pub name: String,
    pub station: Site,
}
