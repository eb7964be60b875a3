//! Sensor payloads as served by the station API.

use serde::{Deserialize, Deserializer};

use super::metric::Metric;

/// One sensor sample in base units (°C, %, hPa).
///
/// Fields the server omits, nulls out or fills with non-numeric junk all
/// deserialize to `None`; downstream code renders those as gaps instead
/// of rejecting the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Reading {
    #[serde(deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub humidity: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub pressure: Option<f64>,
}

impl Reading {
    /// Raw value for a given metric.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::Pressure => self.pressure,
        }
    }
}

/// Accept any JSON value, yielding `Some` only for numbers.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Accept any JSON value, yielding `Some` only for strings.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}
