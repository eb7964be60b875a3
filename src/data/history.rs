//! History log normalization: `/api/log` payloads into chart-ready entries.
//!
//! Log timestamps arrive without a timezone designator; the server writes
//! them in UTC, so parsing assumes UTC. Display strings are rendered in
//! the viewer's local timezone.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use super::reading::{lenient_f64, lenient_string, Reading};
use crate::format::FULL_DATETIME_FORMAT;

/// Format of the `timestamp` field in log entries (SQLite
/// `CURRENT_TIMESTAMP`). The string carries no timezone designator; by
/// contract the server always writes UTC.
pub const SERVER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The raw `/api/log` response.
///
/// Newer servers send a collection keyed by row id, older ones a plain
/// sequence. Keyed entries are consumed in document order, which is the
/// server's enumeration order; nothing here re-sorts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LogPayload {
    Keyed(serde_json::Map<String, serde_json::Value>),
    Entries(Vec<RawLogEntry>),
}

/// One log row exactly as the server serialized it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLogEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub timestamp: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub humidity: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub pressure: Option<f64>,
}

/// A normalized history entry, ready for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Timestamp string exactly as received, if the row had one.
    pub timestamp: Option<String>,
    /// Epoch milliseconds (UTC), or NaN when the timestamp was missing or
    /// malformed. Non-finite entries never contribute to axis domains.
    pub timestamp_ms: f64,
    /// Local wall-clock rendering (`DD/MM/YYYY, HH:MM`), empty when the
    /// timestamp could not be parsed.
    pub local_time: String,
    /// Metric values in base units.
    pub values: Reading,
}

/// Parse a server timestamp into UTC.
pub fn parse_server_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(timestamp, SERVER_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn normalize_entry(raw: RawLogEntry) -> HistoryEntry {
    let parsed = raw.timestamp.as_deref().and_then(parse_server_timestamp);
    let (timestamp_ms, local_time) = match parsed {
        Some(utc) => (
            utc.timestamp_millis() as f64,
            utc.with_timezone(&Local)
                .format(FULL_DATETIME_FORMAT)
                .to_string(),
        ),
        None => (f64::NAN, String::new()),
    };
    HistoryEntry {
        timestamp: raw.timestamp,
        timestamp_ms,
        local_time,
        values: Reading {
            temperature: raw.temperature,
            humidity: raw.humidity,
            pressure: raw.pressure,
        },
    }
}

/// Normalize a full payload, preserving the server's entry order.
///
/// Keyed collections contribute their values; the keys only carry
/// ordering. Values that are not objects are dropped.
pub fn normalize_history(payload: LogPayload) -> Vec<HistoryEntry> {
    match payload {
        LogPayload::Entries(entries) => entries.into_iter().map(normalize_entry).collect(),
        LogPayload::Keyed(map) => map
            .into_iter()
            .filter_map(|(_, value)| serde_json::from_value::<RawLogEntry>(value).ok())
            .map(normalize_entry)
            .collect(),
    }
}
