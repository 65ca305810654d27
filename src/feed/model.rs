use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::error::FeedError;
use super::tree;

pub const FEED_ROOT: &str = "dsn";

/// A field the markup tree may hold either as a single entry or as a list.
///
/// `null` entries stand for empty elements and are dropped by [`OneOrMany::into_vec`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<Option<T>>),
    One(Option<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(entries) => entries.into_iter().flatten().collect(),
            OneOrMany::One(entry) => entry.into_iter().collect(),
        }
    }
}

/// Top level of the status feed, as read from the markup tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFeed {
    pub station: OneOrMany<RawStation>,
    pub dish: OneOrMany<RawDish>,
    pub timestamp: Option<String>,
}

impl RawFeed {
    pub fn parse(raw: &str) -> Result<Self, FeedError> {
        Self::from_tree(tree::parse(raw)?)
    }

    pub fn from_tree(tree: Value) -> Result<Self, FeedError> {
        let Value::Object(mut root) = tree else {
            return Err(FeedError::UnexpectedRoot(String::new()));
        };

        match root.remove(FEED_ROOT) {
            Some(Value::Null) => Ok(RawFeed::default()),
            Some(body) => Ok(serde_json::from_value(body)?),
            None => Err(FeedError::UnexpectedRoot(
                root.keys().next().cloned().unwrap_or_default(),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDish {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@azimuthAngle")]
    pub azimuth_angle: Option<String>,
    #[serde(rename = "@elevationAngle")]
    pub elevation_angle: Option<String>,
    #[serde(rename = "@windSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "@isMSPA")]
    pub is_mspa: Option<String>,
    #[serde(rename = "@isArray")]
    pub is_array: Option<String>,
    #[serde(rename = "@isDDOR")]
    pub is_ddor: Option<String>,
    #[serde(rename = "@activity")]
    pub activity: Option<String>,
    #[serde(rename = "@created")]
    pub created: Option<String>,
    #[serde(rename = "@updated")]
    pub updated: Option<String>,
    #[serde(rename = "downSignal")]
    pub down_signal: OneOrMany<RawSignal>,
    #[serde(rename = "upSignal")]
    pub up_signal: OneOrMany<RawSignal>,
    pub target: OneOrMany<RawTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSignal {
    #[serde(rename = "@signalType")]
    pub signal_type: Option<String>,
    #[serde(rename = "@signalTypeDebug")]
    pub signal_type_debug: Option<String>,
    #[serde(rename = "@dataRate")]
    pub data_rate: Option<String>,
    #[serde(rename = "@frequency")]
    pub frequency: Option<String>,
    #[serde(rename = "@power")]
    pub power: Option<String>,
    #[serde(rename = "@spacecraft")]
    pub spacecraft: Option<String>,
    #[serde(rename = "@spacecraftId")]
    pub spacecraft_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawTarget {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@uplegRange")]
    pub upleg_range: Option<String>,
    #[serde(rename = "@downlegRange")]
    pub downleg_range: Option<String>,
    #[serde(rename = "@rtlt")]
    pub rtlt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawStation {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@friendlyName")]
    pub friendly_name: String,
    #[serde(rename = "@timeUTC")]
    pub time_utc: String,
    #[serde(rename = "@timeZoneOffset")]
    pub time_zone_offset: String,
}

/// Tracking site as reported by the feed. Passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub name: String,
    pub friendly_name: String,
    #[serde(rename = "timeUTC")]
    pub time_utc: String,
    pub time_zone_offset: String,
}

impl From<RawStation> for Station {
    fn from(raw: RawStation) -> Self {
        Self {
            name: raw.name,
            friendly_name: raw.friendly_name,
            time_utc: raw.time_utc,
            time_zone_offset: raw.time_zone_offset,
        }
    }
}
