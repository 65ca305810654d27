//! Human-readable rendering of raw feed telemetry.
//!
//! All formatters are total: input that is blank or not a finite number
//! renders as a sentinel instead of failing.

pub const NOT_APPLICABLE: &str = "N/A";

/// Parse a telemetry value, trimming surrounding whitespace.
///
/// Blank, non-numeric and non-finite values are rejected.
pub fn parse_numeric(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Two decimals, with ties rounded away from zero.
fn fixed2(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

pub fn is_valid_numeric(value: Option<&str>) -> bool {
    parse_numeric(value).is_some()
}

pub fn format_power(value: Option<&str>) -> String {
    match parse_numeric(value) {
        Some(dbm) => format!("{}dBm", fixed2(dbm)),
        None => NOT_APPLICABLE.to_string(),
    }
}

pub fn format_frequency(value: Option<&str>) -> String {
    match parse_numeric(value) {
        Some(hz) => format!("{}GHz", fixed2(hz / 1e9)),
        None => NOT_APPLICABLE.to_string(),
    }
}

pub fn format_data_rate(value: Option<&str>) -> String {
    match parse_numeric(value) {
        Some(bps) => format!("{}kb/s", fixed2(bps / 1e3)),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Distance in km, scaled to the largest fitting unit. Non-positive or
/// invalid input renders as an empty string.
pub fn human_readable_range(value: Option<&str>) -> String {
    let km = match parse_numeric(value) {
        Some(km) if km > 0.0 => km,
        _ => return String::new(),
    };

    if km >= 1e9 {
        format!("{}B km", fixed2(km / 1e9))
    } else if km >= 1e6 {
        format!("{}M km", fixed2(km / 1e6))
    } else if km >= 1e3 {
        format!("{}K km", fixed2(km / 1e3))
    } else {
        format!("{}km", fixed2(km))
    }
}

/// Light time in seconds. `-1` marks a target that is not being tracked and
/// renders, like invalid input, as an empty string.
pub fn human_readable_light_time(value: Option<&str>) -> String {
    let seconds = match parse_numeric(value) {
        Some(s) if s != -1.0 => s,
        _ => return String::new(),
    };

    if seconds > 3600.0 {
        format!("{} Light Hours", fixed2(seconds / 3600.0))
    } else if seconds > 60.0 {
        format!("{} Light Minutes", fixed2(seconds / 60.0))
    } else {
        format!("{} Light Seconds", fixed2(seconds))
    }
}
