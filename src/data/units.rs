//! Display units and conversions from the sensor's base units.
//!
//! The station serves temperature in °C, pressure in hPa and relative
//! humidity in %. Conversions run on calibrated values only; calibration
//! itself always happens in the base unit (see [`crate::data::pipeline`]).
//!
//! Units persist as their symbol strings. An unrecognized symbol in a
//! settings file deserializes to the base unit instead of failing, so a
//! hand-edited document degrades to °C / hPa rather than to an error.

use serde::{Deserialize, Serialize};

/// Symbol shown next to humidity values. Humidity has no alternative unit.
pub const HUMIDITY_SYMBOL: &str = "%";

// ───────────────────────── Temperature ─────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// All units in the order the settings dialog offers them.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// Convert a calibrated °C value into this unit.
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

impl Default for TemperatureUnit {
    fn default() -> Self {
        TemperatureUnit::Celsius
    }
}

impl From<String> for TemperatureUnit {
    fn from(symbol: String) -> Self {
        match symbol.as_str() {
            "°F" => TemperatureUnit::Fahrenheit,
            "K" => TemperatureUnit::Kelvin,
            _ => TemperatureUnit::Celsius,
        }
    }
}

impl From<TemperatureUnit> for String {
    fn from(unit: TemperatureUnit) -> Self {
        unit.symbol().to_string()
    }
}

// ───────────────────────── Pressure ─────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PressureUnit {
    Hectopascal,
    Pascal,
}

impl PressureUnit {
    /// All units in the order the settings dialog offers them.
    pub const ALL: [PressureUnit; 2] = [PressureUnit::Hectopascal, PressureUnit::Pascal];

    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Hectopascal => "hPa",
            PressureUnit::Pascal => "Pa",
        }
    }

    /// Convert a calibrated hPa value into this unit.
    pub fn from_hectopascal(&self, hpa: f64) -> f64 {
        match self {
            PressureUnit::Hectopascal => hpa,
            PressureUnit::Pascal => hpa * 100.0,
        }
    }
}

impl Default for PressureUnit {
    fn default() -> Self {
        PressureUnit::Hectopascal
    }
}

impl From<String> for PressureUnit {
    fn from(symbol: String) -> Self {
        match symbol.as_str() {
            "Pa" => PressureUnit::Pascal,
            _ => PressureUnit::Hectopascal,
        }
    }
}

impl From<PressureUnit> for String {
    fn from(unit: PressureUnit) -> Self {
        unit.symbol().to_string()
    }
}
