use std::fs;

use stationview::data::calibration::CalibrationCoefficients;
use stationview::data::metric::Metric;
use stationview::data::settings::{AxisSettingsMap, DecimalPlaces, DisplaySettings};
use stationview::data::units::{PressureUnit, TemperatureUnit};
use stationview::panels::SettingsPanel;
use stationview::persistence::{PreferenceStore, SETTINGS_FILE};

fn temp_store(name: &str) -> PreferenceStore {
    let dir = std::env::temp_dir().join(format!("stationview-test-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    PreferenceStore::at(dir)
}

#[test]
fn defaults_match_the_documented_values() {
    let settings = DisplaySettings::default();
    assert_eq!(settings.temperature_unit, TemperatureUnit::Celsius);
    assert_eq!(settings.pressure_unit, PressureUnit::Hectopascal);
    for metric in Metric::ALL {
        assert_eq!(settings.decimal_places.get(metric), 3);
        assert_eq!(
            settings.calibration.get(metric),
            CalibrationCoefficients::default()
        );
    }
}

#[test]
fn partial_documents_merge_field_by_field() {
    let settings: DisplaySettings = serde_json::from_str(r#"{"temperature_unit": "K"}"#).unwrap();
    assert_eq!(settings.temperature_unit, TemperatureUnit::Kelvin);
    assert_eq!(settings.pressure_unit, PressureUnit::Hectopascal);
    assert_eq!(settings.decimal_places, DecimalPlaces::default());
}

#[test]
fn nested_partial_documents_merge_too() {
    let settings: DisplaySettings =
        serde_json::from_str(r#"{"decimal_places": {"humidity": 0}}"#).unwrap();
    assert_eq!(settings.decimal_places.humidity, 0);
    assert_eq!(settings.decimal_places.temperature, 3);
    assert_eq!(settings.decimal_places.pressure, 3);
}

#[test]
fn partial_calibration_leaves_other_metrics_at_identity() {
    let settings: DisplaySettings =
        serde_json::from_str(r#"{"calibration": {"pressure": {"offset": -2.5}}}"#).unwrap();
    assert_eq!(settings.calibration.pressure.offset, -2.5);
    assert_eq!(settings.calibration.pressure.scale, 1.0);
    assert_eq!(
        settings.calibration.temperature,
        CalibrationCoefficients::default()
    );
}

#[test]
fn decimal_places_clamp_at_twelve() {
    let places = DecimalPlaces {
        temperature: 99,
        humidity: 12,
        pressure: 0,
    };
    assert_eq!(places.clamped(Metric::Temperature), 12);
    assert_eq!(places.clamped(Metric::Humidity), 12);
    assert_eq!(places.clamped(Metric::Pressure), 0);
}

#[test]
fn display_settings_round_trip_through_the_store() {
    let store = temp_store("display-round-trip");

    let mut settings = DisplaySettings::default();
    settings.temperature_unit = TemperatureUnit::Fahrenheit;
    settings.decimal_places.pressure = 1;
    settings.calibration.temperature = CalibrationCoefficients {
        scale: 1.02,
        offset: -0.3,
    };
    store
        .save_display_settings(&settings)
        .unwrap_or_else(|e| panic!("save should succeed, got: {}", e));
    assert!(store.dir().join(SETTINGS_FILE).exists());

    let loaded = store.load_display_settings();
    assert_eq!(loaded, settings);

    let _ = fs::remove_dir_all(store.dir());
}

#[test]
fn axis_settings_round_trip_through_the_store() {
    let store = temp_store("axis-round-trip");

    let mut axes = AxisSettingsMap::default();
    axes.temperature.y_min = "-5".to_string();
    axes.pressure.x_max = "2024-06-01 12:00".to_string();
    store
        .save_axis_settings(&axes)
        .unwrap_or_else(|e| panic!("save should succeed, got: {}", e));

    let loaded = store.load_axis_settings();
    assert_eq!(loaded.get(Metric::Temperature).y_min, "-5");
    assert_eq!(loaded.get(Metric::Pressure).x_max, "2024-06-01 12:00");
    assert_eq!(loaded, axes);

    let _ = fs::remove_dir_all(store.dir());
}

#[test]
fn missing_files_load_as_defaults() {
    let store = temp_store("missing-files");
    assert_eq!(store.load_display_settings(), DisplaySettings::default());
    assert_eq!(store.load_axis_settings(), AxisSettingsMap::default());
}

#[test]
fn corrupt_files_load_as_defaults() {
    let store = temp_store("corrupt-files");
    fs::create_dir_all(store.dir()).unwrap();
    fs::write(store.dir().join(SETTINGS_FILE), "{not json at all").unwrap();

    assert_eq!(store.load_display_settings(), DisplaySettings::default());

    let _ = fs::remove_dir_all(store.dir());
}

#[test]
fn stale_unit_symbols_degrade_to_base_units() {
    let store = temp_store("stale-units");
    fs::create_dir_all(store.dir()).unwrap();
    fs::write(
        store.dir().join(SETTINGS_FILE),
        r#"{"temperature_unit": "Rankine", "pressure_unit": "mmHg"}"#,
    )
    .unwrap();

    let loaded = store.load_display_settings();
    assert_eq!(loaded.temperature_unit, TemperatureUnit::Celsius);
    assert_eq!(loaded.pressure_unit, PressureUnit::Hectopascal);

    let _ = fs::remove_dir_all(store.dir());
}

#[test]
fn settings_panel_opens_closed_and_toggles() {
    let live = DisplaySettings::default();
    let mut panel = SettingsPanel::new();
    assert!(!panel.is_open());
    panel.toggle(&live);
    assert!(panel.is_open());
    panel.toggle(&live);
    assert!(!panel.is_open());
}
