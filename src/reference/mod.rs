//! Static reference tables: the antenna roster, the antenna to site mapping
//! and the spacecraft catalogue.
//!
//! The tables are read-only after construction. [`ReferenceData::builtin`]
//! provides the compiled-in tables; [`ReferenceData::from_file`] replaces them
//! with a YAML document of the same shape.

mod builtin;
mod error;
mod types;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::diagnostics::Diagnostics;

pub use error::ReferenceError;
pub use types::{AntennaAssignment, Site, Source, SpacecraftRecord, UNKNOWN_SPACECRAFT};

#[derive(Debug, Clone)]
pub struct ReferenceData {
    antennas: Vec<AntennaAssignment>,
    stations: HashMap<String, Site>,
    spacecraft: HashMap<String, SpacecraftRecord>,
}

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    antennas: Vec<AntennaAssignment>,
    #[serde(default)]
    spacecraft: Vec<SpacecraftRecord>,
}

impl ReferenceData {
    pub fn new(
        antennas: Vec<AntennaAssignment>,
        spacecraft: Vec<SpacecraftRecord>,
    ) -> Result<Self, ReferenceError> {
        let mut stations = HashMap::with_capacity(antennas.len());
        for antenna in &antennas {
            if stations
                .insert(antenna.name.clone(), antenna.station)
                .is_some()
            {
                return Err(ReferenceError::DuplicateAntenna(antenna.name.clone()));
            }
        }

        let spacecraft = spacecraft
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();

        Ok(Self {
            antennas,
            stations,
            spacecraft,
        })
    }

    pub fn builtin() -> Self {
        let antennas = builtin::ANTENNAS
            .iter()
            .map(|(name, station)| AntennaAssignment {
                name: name.to_string(),
                station: *station,
            })
            .collect::<Vec<_>>();

        let spacecraft = builtin::SPACECRAFT
            .iter()
            .map(|(id, short_name, long_name, sources)| SpacecraftRecord {
                id: id.to_string(),
                short_name: short_name.to_string(),
                long_name: long_name.to_string(),
                sources: sources
                    .iter()
                    .map(|(title, url)| Source {
                        title: title.to_string(),
                        url: url.to_string(),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        let stations = antennas
            .iter()
            .map(|a| (a.name.clone(), a.station))
            .collect();
        let spacecraft = spacecraft
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();

        Self {
            antennas,
            stations,
            spacecraft,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ReferenceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ReferenceError> {
        let file: ReferenceFile = serde_yaml::from_str(yaml)?;
        Self::new(file.antennas, file.spacecraft)
    }

    /// Roster antennas in display order.
    pub fn antennas(&self) -> &[AntennaAssignment] {
        &self.antennas
    }

    pub fn station_for(&self, antenna: &str) -> Option<Site> {
        self.stations.get(antenna).copied()
    }

    /// Resolve a spacecraft id, tolerating an attribute marker left on the id.
    ///
    /// Unknown ids are reported to `diagnostics` and resolve to a stand-in
    /// record built from the id and the name the feed supplied.
    pub fn spacecraft(
        &self,
        id: &str,
        feed_name: &str,
        diagnostics: &dyn Diagnostics,
    ) -> SpacecraftRecord {
        match self.spacecraft.get(&id.replacen('@', "", 1)) {
            Some(record) => record.clone(),
            None => {
                diagnostics.unknown_spacecraft(id, feed_name);
                SpacecraftRecord::unknown(id, feed_name)
            }
        }
    }

    pub fn spacecraft_count(&self) -> usize {
        self.spacecraft.len()
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::LogDiagnostics;
    use indoc::indoc;

    #[test]
    fn builtin_roster_has_thirteen_antennas() {
        let reference = ReferenceData::builtin();
        assert_eq!(reference.antennas().len(), 13);
        assert_eq!(reference.antennas()[0].name, "DSS26");
        assert_eq!(reference.antennas()[12].name, "DSS63");
    }

    #[test]
    fn station_lookup() {
        let reference = ReferenceData::builtin();
        assert_eq!(reference.station_for("DSS24"), Some(Site::Goldstone));
        assert_eq!(reference.station_for("DSS43"), Some(Site::Canberra));
        assert_eq!(reference.station_for("DSS63"), Some(Site::Madrid));
        assert_eq!(reference.station_for("DSS99"), None);
        assert_eq!(reference.station_for("dss24"), None);
    }

    #[test]
    fn known_spacecraft() {
        let reference = ReferenceData::builtin();
        let diagnostics = LogDiagnostics::new();

        let record = reference.spacecraft("110", "MMS3", &diagnostics);
        assert_eq!(record.long_name, "Magnetospheric Multiscale Mission 3");
        assert_eq!(record.sources.len(), 1);
        assert_eq!(diagnostics.unknown_spacecraft_count(), 0);
    }

    #[test]
    fn marker_is_stripped_before_lookup() {
        let reference = ReferenceData::builtin();
        let diagnostics = LogDiagnostics::new();

        let record = reference.spacecraft("@96", "SPP", &diagnostics);
        assert_eq!(record.long_name, "Parker Solar Probe");
        assert_eq!(diagnostics.unknown_spacecraft_count(), 0);
    }

    #[test]
    fn unknown_spacecraft_is_synthesized_and_reported() {
        let reference = ReferenceData::builtin();
        let diagnostics = LogDiagnostics::new();

        let record = reference.spacecraft("9999", "NEW", &diagnostics);
        assert_eq!(record.id, "9999");
        assert_eq!(record.short_name, "NEW");
        assert_eq!(record.long_name, UNKNOWN_SPACECRAFT);
        assert!(record.sources.is_empty());
        assert_eq!(diagnostics.unknown_spacecraft_count(), 1);
    }

    #[test]
    fn yaml_override() {
        let reference = ReferenceData::from_yaml(indoc! {"
            antennas:
              - name: DSS14
                station: Goldstone
              - name: DSS43
                station: Canberra
            spacecraft:
              - id: '31'
                shortName: VGR1
                longName: Voyager 1
        "})
        .unwrap();

        assert_eq!(reference.antennas().len(), 2);
        assert_eq!(reference.station_for("DSS43"), Some(Site::Canberra));
        assert_eq!(reference.station_for("DSS24"), None);
        assert_eq!(reference.spacecraft_count(), 1);
    }

    #[test]
    fn duplicate_antennas_are_rejected() {
        let err = ReferenceData::from_yaml(indoc! {"
            antennas:
              - name: DSS14
                station: Goldstone
              - name: DSS14
                station: Madrid
        "})
        .unwrap_err();
        assert!(matches!(err, ReferenceError::DuplicateAntenna(name) if name == "DSS14"));
    }
}
