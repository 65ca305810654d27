use std::collections::HashMap;

use crate::diagnostics::Diagnostics;
use crate::feed::RawDish;
use crate::reference::ReferenceData;

use super::normalize::normalize_dish;
use super::types::AntennaRecord;

/// Placeholder records for every roster antenna, all offline.
pub fn roster(reference: &ReferenceData) -> Vec<AntennaRecord> {
    reference
        .antennas()
        .iter()
        .map(|a| AntennaRecord::placeholder(&a.name, Some(a.station)))
        .collect()
}

/// Overlay reported dishes onto the roster.
///
/// The output holds exactly one record per roster entry, in roster order.
/// A roster entry is replaced wholesale by the normalized feed record with
/// the same name; entries the feed did not report are kept as they are.
/// Feed dishes unknown to the roster are dropped.
pub fn reconcile(
    feed: Vec<RawDish>,
    roster: Vec<AntennaRecord>,
    reference: &ReferenceData,
    diagnostics: &dyn Diagnostics,
) -> Vec<AntennaRecord> {
    let mut reported: HashMap<String, RawDish> = HashMap::with_capacity(feed.len());
    for dish in feed {
        // First report of a name wins.
        reported.entry(dish.name.clone()).or_insert(dish);
    }

    let records: Vec<_> = roster
        .into_iter()
        .map(|placeholder| match reported.remove(&placeholder.name) {
            Some(raw) => normalize_dish(raw, reference, diagnostics),
            None => placeholder,
        })
        .collect();

    if !reported.is_empty() {
        let mut dropped: Vec<_> = reported.keys().map(String::as_str).collect();
        dropped.sort_unstable();
        log::debug!("dropping dishes missing from roster: {}", dropped.join(", "));
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::LogDiagnostics;
    use crate::dish::DishStatus;
    use crate::reference::{AntennaAssignment, Site};

    fn reported(name: &str, elevation: &str) -> RawDish {
        RawDish {
            name: name.into(),
            elevation_angle: Some(elevation.into()),
            ..RawDish::default()
        }
    }

    #[test]
    fn empty_feed_returns_roster_unchanged() {
        let reference = ReferenceData::builtin();
        let diagnostics = LogDiagnostics::new();
        let placeholders = roster(&reference);

        let records = reconcile(Vec::new(), placeholders.clone(), &reference, &diagnostics);
        assert_eq!(records, placeholders);
        assert!(records.iter().all(|r| r.status() == DishStatus::Offline));
    }

    #[test]
    fn output_follows_roster_order_and_size() {
        let reference = ReferenceData::builtin();
        let diagnostics = LogDiagnostics::new();

        let feed = vec![
            reported("DSS63", "12.5"),
            reported("DSS99", "40.0"),
            reported("DSS26", "30.0"),
        ];
        let records = reconcile(feed, roster(&reference), &reference, &diagnostics);

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<_> = reference.antennas().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, expected);
        assert_eq!(records[0].status(), DishStatus::Online);
        assert_eq!(records[12].status(), DishStatus::Online);
        assert_eq!(
            records.iter().filter(|r| r.status() == DishStatus::Online).count(),
            2
        );
    }

    #[test]
    fn matching_is_exact() {
        let reference = ReferenceData::builtin();
        let diagnostics = LogDiagnostics::new();

        let feed = vec![reported("dss24", "48.01"), reported("DSS24 ", "48.01")];
        let records = reconcile(feed, roster(&reference), &reference, &diagnostics);
        assert!(records.iter().all(|r| r.status() == DishStatus::Offline));
    }

    #[test]
    fn first_report_wins() {
        let reference = ReferenceData::builtin();
        let diagnostics = LogDiagnostics::new();

        let feed = vec![reported("DSS14", "20.0"), reported("DSS14", "")];
        let records = reconcile(feed, roster(&reference), &reference, &diagnostics);
        let dss14 = records.iter().find(|r| r.name == "DSS14").unwrap();
        assert_eq!(dss14.elevation_angle.as_deref(), Some("20.0"));
    }

    #[test]
    fn substitute_roster() {
        let reference = ReferenceData::new(
            vec![AntennaAssignment {
                name: "DSS43".into(),
                station: Site::Canberra,
            }],
            Vec::new(),
        )
        .unwrap();
        let diagnostics = LogDiagnostics::new();

        let feed = vec![reported("DSS24", "48.01"), reported("DSS43", "5.0")];
        let records = reconcile(feed, roster(&reference), &reference, &diagnostics);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].metadata.station, Some(Site::Canberra));
        assert_eq!(records[0].status(), DishStatus::Online);
    }
}
