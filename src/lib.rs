//! stationview crate root: re-exports and module wiring.
//!
//! A native dashboard for the BME280 weather-station HTTP API, built on
//! egui/eframe. The implementation is split into cohesive modules:
//! - `client`: endpoint fetchers and the background poll loop
//! - `data`: readings, history normalization, calibration, units, axis domains
//! - `format`: fixed-format time rendering and axis input parsing
//! - `panels`: the egui widgets (metric cards, history charts, settings dialog)
//! - `persistence`: JSON preference storage under `~/.stationview`
//! - `app`: the eframe application and `run_dashboard` entry point

pub mod app;
pub mod client;
pub mod config;
pub mod data;
pub mod format;
pub mod panels;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_dashboard, DashboardApp};
pub use client::{fetch_current, fetch_history, spawn_poller, FetchError, PollEvent};
pub use config::DashboardConfig;
pub use data::calibration::{CalibrationCoefficients, CalibrationTable};
pub use data::domain::{resolve_x_domain, resolve_y_domain, AxisBound, ResolvedDomain};
pub use data::history::{normalize_history, HistoryEntry, LogPayload};
pub use data::metric::Metric;
pub use data::pipeline::display_value;
pub use data::reading::Reading;
pub use data::settings::{AxisSettings, AxisSettingsMap, DecimalPlaces, DisplaySettings};
pub use data::units::{PressureUnit, TemperatureUnit};
pub use persistence::PreferenceStore;
