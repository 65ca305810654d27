use crate::diagnostics::Diagnostics;
use crate::feed::{RawDish, RawSignal, RawTarget};
use crate::reference::ReferenceData;
use crate::units;

use super::types::{
    AntennaRecord, DishStatus, Metadata, SignalDisplay, SignalEntry, SignalType, TargetDisplay,
    TargetEntry,
};

/// Turn one reported dish into its display record.
pub fn normalize_dish(
    raw: RawDish,
    reference: &ReferenceData,
    diagnostics: &dyn Diagnostics,
) -> AntennaRecord {
    let status = if raw.elevation_angle.as_deref().is_some_and(|v| !v.is_empty()) {
        DishStatus::Online
    } else {
        DishStatus::Offline
    };
    let station = reference.station_for(&raw.name);

    AntennaRecord {
        azimuth_angle: non_empty(raw.azimuth_angle),
        elevation_angle: non_empty(raw.elevation_angle),
        wind_speed: non_empty(raw.wind_speed),
        is_mspa: parse_flag(raw.is_mspa.as_deref()),
        is_array: parse_flag(raw.is_array.as_deref()),
        is_ddor: parse_flag(raw.is_ddor.as_deref()),
        activity: non_empty(raw.activity),
        created: non_empty(raw.created),
        updated: non_empty(raw.updated),
        target: raw
            .target
            .into_vec()
            .into_iter()
            .map(|t| normalize_target(t, reference, diagnostics))
            .collect(),
        down_signal: normalize_signals(raw.down_signal.into_vec()),
        up_signal: normalize_signals(raw.up_signal.into_vec()),
        metadata: Metadata { status, station },
        name: raw.name,
    }
}

fn normalize_signals(signals: Vec<RawSignal>) -> Vec<SignalEntry> {
    signals
        .into_iter()
        .filter(|s| !is_idle(s))
        .map(normalize_signal)
        .collect()
}

/// A `none` channel without readings carries no information.
fn is_idle(signal: &RawSignal) -> bool {
    SignalType::from_feed(signal.signal_type.as_deref()) == SignalType::None
        && is_blank(&signal.data_rate)
        && is_blank(&signal.frequency)
        && is_blank(&signal.power)
}

fn normalize_signal(raw: RawSignal) -> SignalEntry {
    let display = SignalDisplay {
        data_rate: units::format_data_rate(raw.data_rate.as_deref()),
        frequency: units::format_frequency(raw.frequency.as_deref()),
        power: units::format_power(raw.power.as_deref()),
    };

    SignalEntry {
        signal_type: SignalType::from_feed(raw.signal_type.as_deref()),
        signal_type_debug: raw.signal_type_debug,
        data_rate: non_empty(raw.data_rate),
        frequency: non_empty(raw.frequency),
        power: non_empty(raw.power),
        spacecraft: non_empty(raw.spacecraft),
        spacecraft_id: non_empty(raw.spacecraft_id),
        display,
    }
}

fn normalize_target(
    raw: RawTarget,
    reference: &ReferenceData,
    diagnostics: &dyn Diagnostics,
) -> TargetEntry {
    let display = TargetDisplay {
        upleg_range: units::human_readable_range(raw.upleg_range.as_deref()),
        downleg_range: units::human_readable_range(raw.downleg_range.as_deref()),
        rtlt: units::human_readable_light_time(raw.rtlt.as_deref()),
    };
    let spacecraft = reference.spacecraft(&raw.id, &raw.name, diagnostics);

    TargetEntry {
        name: raw.name,
        id: raw.id,
        upleg_range: non_empty(raw.upleg_range),
        downleg_range: non_empty(raw.downleg_range),
        rtlt: non_empty(raw.rtlt),
        display,
        spacecraft,
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
