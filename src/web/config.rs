use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::dish::StatusOrder;
use crate::reference::{ReferenceData, ReferenceError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("reference data error: {0}")]
    Reference(#[from] ReferenceError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    pub feed: Option<FeedConfig>,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Replaces the built-in roster and spacecraft tables.
    pub reference: Option<PathBuf>,
    #[serde(default)]
    pub api_keys: Vec<ApiKey>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub path: PathBuf,
    #[serde(
        default = "default_refresh_interval",
        deserialize_with = "deserialize_duration"
    )]
    pub refresh_interval: Duration,
}

fn default_refresh_interval() -> Duration {
    Duration::from_secs(5)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub order: StatusOrder,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiKey {
    pub key: String,
    pub name: String,
    pub permissions: HashSet<Permission>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    IngestFeed,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn find_api_key(&self, key: &str) -> Option<&ApiKey> {
        self.api_keys.iter().find(|k| k.key == key)
    }

    pub fn load_reference(&self) -> Result<ReferenceData, ConfigError> {
        match &self.reference {
            Some(path) => Ok(ReferenceData::from_file(path)?),
            None => Ok(ReferenceData::builtin()),
        }
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let duration = humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)?;
    if duration.is_zero() {
        return Err(serde::de::Error::custom("refresh interval must be non-zero"));
    }
    Ok(duration)
}
