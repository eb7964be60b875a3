use stationview::data::calibration::CalibrationCoefficients;
use stationview::data::metric::Metric;
use stationview::data::pipeline::display_value;
use stationview::data::settings::DisplaySettings;
use stationview::data::units::{PressureUnit, TemperatureUnit};

fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{}: expected {}, got: {}",
        context,
        expected,
        actual
    );
}

#[test]
fn calibration_is_identity_by_default() {
    let coefficients = CalibrationCoefficients::default();
    assert_close(coefficients.apply(21.5), 21.5, "identity calibration");
}

#[test]
fn calibration_applies_scale_then_offset() {
    let coefficients = CalibrationCoefficients {
        scale: 2.0,
        offset: 0.5,
    };
    assert_close(coefficients.apply(10.0), 20.5, "scale then offset");
}

#[test]
fn non_finite_scale_falls_back_while_offset_applies() {
    let coefficients = CalibrationCoefficients {
        scale: f64::NAN,
        offset: 3.0,
    };
    assert_close(coefficients.apply(2.0), 5.0, "NaN scale treated as 1");
}

#[test]
fn non_finite_offset_falls_back_while_scale_applies() {
    let coefficients = CalibrationCoefficients {
        scale: 2.0,
        offset: f64::INFINITY,
    };
    assert_close(coefficients.apply(2.0), 4.0, "infinite offset treated as 0");
}

#[test]
fn absent_values_stay_absent() {
    let settings = DisplaySettings::default();
    for metric in Metric::ALL {
        assert_eq!(
            display_value(metric, None, &settings),
            None,
            "Expected None to propagate for {}",
            metric
        );
    }
}

#[test]
fn celsius_passes_through_unchanged() {
    let settings = DisplaySettings::default();
    let value = display_value(Metric::Temperature, Some(21.5), &settings);
    assert_close(value.unwrap(), 21.5, "°C display");
}

#[test]
fn temperature_conversions_hit_the_known_values() {
    assert_close(TemperatureUnit::Celsius.from_celsius(20.0), 20.0, "20 °C in °C");
    assert_close(TemperatureUnit::Fahrenheit.from_celsius(20.0), 68.0, "20 °C in °F");
    assert_close(TemperatureUnit::Kelvin.from_celsius(20.0), 293.15, "20 °C in K");
}

#[test]
fn fahrenheit_conversion_runs_after_calibration() {
    let mut settings = DisplaySettings::default();
    settings.temperature_unit = TemperatureUnit::Fahrenheit;
    settings.calibration.temperature = CalibrationCoefficients {
        scale: 2.0,
        offset: 5.0,
    };
    // 10 °C calibrates to 25 °C, then converts to 77 °F. Converting
    // first would give 2 * 50 + 5 = 105 °F instead.
    let value = display_value(Metric::Temperature, Some(10.0), &settings);
    assert_close(value.unwrap(), 77.0, "calibrate before converting");
}

#[test]
fn kelvin_adds_the_absolute_offset() {
    let mut settings = DisplaySettings::default();
    settings.temperature_unit = TemperatureUnit::Kelvin;
    let value = display_value(Metric::Temperature, Some(0.0), &settings);
    assert_close(value.unwrap(), 273.15, "0 °C in K");
}

#[test]
fn pressure_converts_to_pascal() {
    let mut settings = DisplaySettings::default();
    settings.pressure_unit = PressureUnit::Pascal;
    let value = display_value(Metric::Pressure, Some(1013.25), &settings);
    assert_close(value.unwrap(), 101325.0, "hPa to Pa");
}

#[test]
fn pressure_calibration_happens_in_hectopascal() {
    let mut settings = DisplaySettings::default();
    settings.pressure_unit = PressureUnit::Pascal;
    settings.calibration.pressure = CalibrationCoefficients {
        scale: 1.0,
        offset: -13.25,
    };
    let value = display_value(Metric::Pressure, Some(1013.25), &settings);
    assert_close(value.unwrap(), 100000.0, "offset applied before Pa conversion");
}

#[test]
fn humidity_has_no_unit_conversion() {
    let mut settings = DisplaySettings::default();
    settings.temperature_unit = TemperatureUnit::Kelvin;
    settings.pressure_unit = PressureUnit::Pascal;
    settings.calibration.humidity = CalibrationCoefficients {
        scale: 1.5,
        offset: -2.0,
    };
    let value = display_value(Metric::Humidity, Some(40.0), &settings);
    assert_close(value.unwrap(), 58.0, "humidity only calibrated");
}

#[test]
fn unit_symbols_follow_the_selected_units() {
    let mut settings = DisplaySettings::default();
    assert_eq!(settings.unit_symbol(Metric::Temperature), "°C");
    assert_eq!(settings.unit_symbol(Metric::Humidity), "%");
    assert_eq!(settings.unit_symbol(Metric::Pressure), "hPa");

    settings.temperature_unit = TemperatureUnit::Fahrenheit;
    settings.pressure_unit = PressureUnit::Pascal;
    assert_eq!(settings.unit_symbol(Metric::Temperature), "°F");
    assert_eq!(settings.unit_symbol(Metric::Pressure), "Pa");
}

#[test]
fn unknown_unit_symbols_deserialize_to_base_units() {
    let temperature: TemperatureUnit = serde_json::from_str("\"banana\"").unwrap();
    assert_eq!(temperature, TemperatureUnit::Celsius);
    let pressure: PressureUnit = serde_json::from_str("\"banana\"").unwrap();
    assert_eq!(pressure, PressureUnit::Hectopascal);
}

#[test]
fn unit_symbols_round_trip_through_serde() {
    let json = serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap();
    assert_eq!(json, "\"°F\"", "Expected the symbol string, got: {}", json);
    let back: TemperatureUnit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, TemperatureUnit::Fahrenheit);

    let json = serde_json::to_string(&PressureUnit::Pascal).unwrap();
    assert_eq!(json, "\"Pa\"", "Expected the symbol string, got: {}", json);
}
