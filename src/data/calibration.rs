//! Linear per-metric calibration applied to raw sensor values.

use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// Linear correction `value * scale + offset`.
///
/// Applied in the metric's base unit, before any display-unit
/// conversion. Non-finite coefficients are ignored field by field: a NaN
/// scale falls back to 1 while a finite offset still applies, and vice
/// versa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationCoefficients {
    pub scale: f64,
    pub offset: f64,
}

impl Default for CalibrationCoefficients {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }
}

impl CalibrationCoefficients {
    pub fn apply(&self, raw: f64) -> f64 {
        let scale = if self.scale.is_finite() { self.scale } else { 1.0 };
        let offset = if self.offset.is_finite() { self.offset } else { 0.0 };
        raw * scale + offset
    }
}

/// Calibration coefficients for every metric.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationTable {
    pub temperature: CalibrationCoefficients,
    pub humidity: CalibrationCoefficients,
    pub pressure: CalibrationCoefficients,
}

impl CalibrationTable {
    pub fn get(&self, metric: Metric) -> CalibrationCoefficients {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::Pressure => self.pressure,
        }
    }

    pub fn get_mut(&mut self, metric: Metric) -> &mut CalibrationCoefficients {
        match metric {
            Metric::Temperature => &mut self.temperature,
            Metric::Humidity => &mut self.humidity,
            Metric::Pressure => &mut self.pressure,
        }
    }
}
