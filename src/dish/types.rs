use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::reference::{Site, SpacecraftRecord};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum DishStatus {
    Offline,
    Online,
}

/// Derived per-antenna data that the feed does not carry itself.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Metadata {
    pub status: DishStatus,
    pub station: Option<Site>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    Data,
    Carrier,
    None,
    Unknown,
}

impl SignalType {
    pub fn from_feed(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("data") => SignalType::Data,
            Some("carrier") => SignalType::Carrier,
            Some("none") => SignalType::None,
            _ => SignalType::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignalDisplay {
    pub data_rate: String,
    pub frequency: String,
    pub power: String,
}

/// An up- or downlink channel on an antenna.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignalEntry {
    pub signal_type: SignalType,
    pub signal_type_debug: Option<String>,
    pub data_rate: Option<String>,
    pub frequency: Option<String>,
    pub power: Option<String>,
    pub spacecraft: Option<String>,
    pub spacecraft_id: Option<String>,
    pub display: SignalDisplay,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetDisplay {
    pub upleg_range: String,
    pub downleg_range: String,
    pub rtlt: String,
}

/// A spacecraft an antenna is currently tracking.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetEntry {
    pub name: String,
    pub id: String,
    pub upleg_range: Option<String>,
    pub downleg_range: Option<String>,
    pub rtlt: Option<String>,
    pub display: TargetDisplay,
    pub spacecraft: SpacecraftRecord,
}

/// One physical antenna. `target`, `down_signal` and `up_signal` are always
/// lists, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AntennaRecord {
    pub name: String,
    pub azimuth_angle: Option<String>,
    pub elevation_angle: Option<String>,
    pub wind_speed: Option<String>,
    #[serde(rename = "isMSPA")]
    pub is_mspa: Option<bool>,
    pub is_array: Option<bool>,
    #[serde(rename = "isDDOR")]
    pub is_ddor: Option<bool>,
    pub activity: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub target: Vec<TargetEntry>,
    pub down_signal: Vec<SignalEntry>,
    pub up_signal: Vec<SignalEntry>,
    pub metadata: Metadata,
}

impl AntennaRecord {
    /// Roster entry for an antenna the feed has not reported.
    pub fn placeholder(name: &str, station: Option<Site>) -> Self {
        Self {
            name: name.to_string(),
            azimuth_angle: None,
            elevation_angle: None,
            wind_speed: None,
            is_mspa: None,
            is_array: None,
            is_ddor: None,
            activity: None,
            created: None,
            updated: None,
            target: Vec::new(),
            down_signal: Vec::new(),
            up_signal: Vec::new(),
            metadata: Metadata {
                status: DishStatus::Offline,
                station,
            },
        }
    }

    pub fn status(&self) -> DishStatus {
        self.metadata.status
    }
}
