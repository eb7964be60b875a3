//! The display pipeline: calibrate in base units, then convert.

use super::metric::Metric;
use super::settings::DisplaySettings;

/// Project a raw value into display space.
///
/// Calibration always runs first, in the metric's base unit; the unit
/// conversion sees only calibrated values. Absent values stay absent.
pub fn display_value(metric: Metric, raw: Option<f64>, settings: &DisplaySettings) -> Option<f64> {
    let calibrated = raw.map(|value| settings.calibration.get(metric).apply(value));
    match metric {
        Metric::Temperature => calibrated.map(|value| settings.temperature_unit.from_celsius(value)),
        Metric::Humidity => calibrated,
        Metric::Pressure => calibrated.map(|value| settings.pressure_unit.from_hectopascal(value)),
    }
}
