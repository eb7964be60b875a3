//! User-adjustable display preferences and chart axis overrides.
//!
//! Both documents persist as JSON (see [`crate::persistence`]). Every
//! nesting level carries serde defaults, so a partial or stale file
//! merges field by field over the built-in defaults instead of being
//! discarded wholesale.

use serde::{Deserialize, Serialize};

use super::calibration::CalibrationTable;
use super::metric::Metric;
use super::units::{PressureUnit, TemperatureUnit, HUMIDITY_SYMBOL};

/// Upper bound for configurable decimal places.
pub const MAX_DECIMAL_PLACES: u32 = 12;

// ───────────────────────── Display settings ─────────────────────────

/// Decimal places per metric for cards and chart readouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimalPlaces {
    pub temperature: u32,
    pub humidity: u32,
    pub pressure: u32,
}

impl Default for DecimalPlaces {
    fn default() -> Self {
        Self {
            temperature: 3,
            humidity: 3,
            pressure: 3,
        }
    }
}

impl DecimalPlaces {
    pub fn get(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::Pressure => self.pressure,
        }
    }

    pub fn get_mut(&mut self, metric: Metric) -> &mut u32 {
        match metric {
            Metric::Temperature => &mut self.temperature,
            Metric::Humidity => &mut self.humidity,
            Metric::Pressure => &mut self.pressure,
        }
    }

    /// Places for a metric, clamped to `0..=MAX_DECIMAL_PLACES`.
    pub fn clamped(&self, metric: Metric) -> usize {
        self.get(metric).min(MAX_DECIMAL_PLACES) as usize
    }
}

/// All display preferences.
///
/// Saved only when the user confirms the settings dialog; edits in the
/// dialog work on a draft copy (see [`crate::panels::SettingsPanel`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub temperature_unit: TemperatureUnit,
    pub pressure_unit: PressureUnit,
    pub decimal_places: DecimalPlaces,
    pub calibration: CalibrationTable,
}

impl DisplaySettings {
    /// Display-unit symbol for a metric under these settings.
    pub fn unit_symbol(&self, metric: Metric) -> &'static str {
        match metric {
            Metric::Temperature => self.temperature_unit.symbol(),
            Metric::Humidity => HUMIDITY_SYMBOL,
            Metric::Pressure => self.pressure_unit.symbol(),
        }
    }
}

// ───────────────────────── Axis overrides ─────────────────────────

/// Axis override inputs for one chart, kept as the raw strings the user
/// typed. Empty or unparseable text means "auto" for that side; parsing
/// happens at render time (see [`crate::format`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    pub x_min: String,
    pub x_max: String,
    pub y_min: String,
    pub y_max: String,
}

impl AxisSettings {
    /// Clear all four overrides back to auto.
    pub fn reset(&mut self) {
        *self = AxisSettings::default();
    }
}

/// Axis overrides for every chart, persisted on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettingsMap {
    pub temperature: AxisSettings,
    pub humidity: AxisSettings,
    pub pressure: AxisSettings,
}

impl AxisSettingsMap {
    pub fn get(&self, metric: Metric) -> &AxisSettings {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::Humidity => &self.humidity,
            Metric::Pressure => &self.pressure,
        }
    }

    pub fn get_mut(&mut self, metric: Metric) -> &mut AxisSettings {
        match metric {
            Metric::Temperature => &mut self.temperature,
            Metric::Humidity => &mut self.humidity,
            Metric::Pressure => &mut self.pressure,
        }
    }
}
