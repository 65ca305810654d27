//! End-to-end normalization of a captured feed against the built-in roster.

use std::sync::Arc;

use dsn_monitor::diagnostics::LogDiagnostics;
use dsn_monitor::dish::{DishStatus, SignalType, StatusOrder};
use dsn_monitor::feed::FileSource;
use dsn_monitor::reference::{ReferenceData, Site};
use dsn_monitor::{DsnSnapshot, Pipeline};

const FIXTURE: &str = include_str!("fixtures/dsn.xml");

fn pipeline(diagnostics: Arc<LogDiagnostics>) -> Pipeline {
    Pipeline::new(
        Arc::new(ReferenceData::builtin()),
        diagnostics,
        StatusOrder::OfflineFirst,
    )
}

fn normalize() -> (DsnSnapshot, Arc<LogDiagnostics>) {
    let diagnostics = Arc::new(LogDiagnostics::new());
    let snapshot = pipeline(diagnostics.clone()).process(FIXTURE).unwrap();
    (snapshot, diagnostics)
}

#[test]
fn every_roster_antenna_appears_once() {
    let (snapshot, _) = normalize();
    let reference = ReferenceData::builtin();

    assert_eq!(snapshot.dishes.len(), 13);
    for antenna in reference.antennas() {
        let count = snapshot
            .dishes
            .iter()
            .filter(|d| d.name == antenna.name)
            .count();
        assert_eq!(count, 1, "{}", antenna.name);
    }
    assert!(snapshot.dishes.iter().all(|d| d.name != "DSS99"));
}

#[test]
fn reported_online_dish() {
    let (snapshot, _) = normalize();
    let dss24 = snapshot.dishes.iter().find(|d| d.name == "DSS24").unwrap();

    assert_eq!(dss24.status(), DishStatus::Online);
    assert_eq!(dss24.metadata.station, Some(Site::Goldstone));
    assert_eq!(dss24.azimuth_angle.as_deref(), Some("191.36"));
    assert_eq!(dss24.is_ddor, Some(false));

    assert_eq!(dss24.down_signal.len(), 1);
    assert_eq!(dss24.up_signal.len(), 1);
    assert_eq!(dss24.target.len(), 1);

    let down = &dss24.down_signal[0];
    assert_eq!(down.signal_type, SignalType::Data);
    assert_eq!(down.display.data_rate, "1249.98kb/s");
    assert_eq!(down.display.power, "-107.86dBm");

    let up = &dss24.up_signal[0];
    assert_eq!(up.display.data_rate, "N/A");
    assert_eq!(up.display.frequency, "0.00GHz");

    let target = &dss24.target[0];
    assert_eq!(target.display.upleg_range, "96.27K km");
    assert_eq!(target.display.rtlt, "0.64 Light Seconds");
    assert_eq!(target.spacecraft.short_name, "MMS3");
}

#[test]
fn reported_offline_dish() {
    let (snapshot, _) = normalize();
    let dss26 = snapshot.dishes.iter().find(|d| d.name == "DSS26").unwrap();

    assert_eq!(dss26.status(), DishStatus::Offline);
    assert!(dss26.down_signal.is_empty());
    assert!(dss26.up_signal.is_empty());
    assert_eq!(dss26.elevation_angle, None);
    assert!(dss26.created.is_some());

    let targets: Vec<_> = dss26.target.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(targets, ["MMS3", "SPP"]);
    assert_eq!(dss26.target[1].display.rtlt, "23.14 Light Minutes");
}

#[test]
fn unreported_antennas_keep_placeholders() {
    let (snapshot, _) = normalize();
    let placeholders: Vec<_> = snapshot
        .dishes
        .iter()
        .filter(|d| d.name != "DSS24" && d.name != "DSS26")
        .collect();

    assert_eq!(placeholders.len(), 11);
    for dish in placeholders {
        assert_eq!(dish.status(), DishStatus::Offline);
        assert!(dish.created.is_none());
        assert!(dish.target.is_empty());
        assert!(dish.metadata.station.is_some());
    }
}

#[test]
fn offline_dishes_rank_first() {
    let (snapshot, _) = normalize();
    assert_eq!(snapshot.dishes.last().unwrap().name, "DSS24");
    assert_eq!(snapshot.dishes[0].name, "DSS26");
}

#[test]
fn stations_and_timestamp_pass_through() {
    let (snapshot, _) = normalize();
    let friendly: Vec<_> = snapshot
        .stations
        .iter()
        .map(|s| s.friendly_name.as_str())
        .collect();
    assert_eq!(friendly, ["Goldstone", "Madrid", "Canberra"]);
    assert_eq!(snapshot.timestamp, "1612036782117");
}

#[test]
fn dropped_antennas_do_not_raise_diagnostics() {
    let (_, diagnostics) = normalize();
    assert_eq!(diagnostics.unknown_spacecraft_count(), 0);
}

#[test]
fn serialized_shape() {
    let (snapshot, _) = normalize();
    let value = serde_json::to_value(&snapshot).unwrap();

    let dss24 = value["dishes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["name"] == "DSS24")
        .unwrap();
    assert_eq!(dss24["metadata"]["status"], "ONLINE");
    assert_eq!(dss24["metadata"]["station"], "Goldstone");
    assert_eq!(dss24["downSignal"][0]["signalType"], "data");
    assert_eq!(dss24["target"][0]["spacecraft"]["longName"], "Magnetospheric Multiscale Mission 3");
    assert_eq!(value["stations"][0]["timeZoneOffset"], "-28800000");
}

#[tokio::test]
async fn reads_feed_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dsn.xml");
    std::fs::write(&path, FIXTURE).unwrap();

    let snapshot = pipeline(Arc::new(LogDiagnostics::new()))
        .process_source(&FileSource::new(path))
        .await
        .unwrap();
    assert_eq!(snapshot.dishes.len(), 13);
}
