//! Fixed-format time rendering and parsing of axis override inputs.
//!
//! Display strings use day-first ordering and 24-hour clocks in the
//! viewer's local timezone, independent of system locale.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Full local datetime, used for history rows and hover labels.
pub const FULL_DATETIME_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// Compact local datetime for chart tick labels.
pub const TICK_DATETIME_FORMAT: &str = "%d/%m, %H:%M";

/// Render epoch milliseconds as a compact local tick label.
///
/// Non-finite or out-of-range input renders as an empty string.
pub fn format_tick(epoch_ms: f64) -> String {
    format_epoch_ms(epoch_ms, TICK_DATETIME_FORMAT)
}

fn format_epoch_ms(epoch_ms: f64, format: &str) -> String {
    if !epoch_ms.is_finite() {
        return String::new();
    }
    match DateTime::from_timestamp_millis(epoch_ms as i64) {
        Some(utc) => utc.with_timezone(&Local).format(format).to_string(),
        None => String::new(),
    }
}

/// Relative "Last update" label for the header bar.
///
/// `Never` before the first successful fetch, `Just now` within five
/// seconds, minute granularity within the hour, a local time of day
/// after that.
pub fn format_last_update(last: Option<DateTime<Local>>, now: DateTime<Local>) -> String {
    let Some(last) = last else {
        return "Never".to_string();
    };
    let seconds = (now - last).num_seconds();
    if seconds < 5 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else {
        last.format("%H:%M:%S").to_string()
    }
}

/// Parse a datetime axis override into epoch milliseconds.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]`, the same with a space separator, and
/// a bare `YYYY-MM-DD` (midnight). Times are read as local wall-clock.
/// Blank or unparseable input yields `None`, which means "auto".
pub fn parse_date_input(input: &str) -> Option<f64> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let naive = FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.timestamp_millis() as f64)
}

/// Parse a numeric axis override.
///
/// Blank input yields `None`; so does anything that is not a finite
/// number.
pub fn parse_number_input(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Fixed-point rendering of a display value.
pub fn format_value(value: f64, decimal_places: usize) -> String {
    format!("{:.*}", decimal_places, value)
}
