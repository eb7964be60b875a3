//! Runtime configuration for the dashboard.

use std::time::Duration;

/// Top-level configuration, consumed by [`crate::app::run_dashboard`].
///
/// `Default` points at `http://localhost:5000` with a 5 s poll period and a
/// 10 s request timeout; override fields before calling `run_dashboard`.
#[derive(Clone)]
pub struct DashboardConfig {
    /// Base URL of the station API, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Period between current-reading polls.
    pub poll_interval: Duration,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Native window title.
    pub title: String,
    /// Window options; when `None`, a default window size is used.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            poll_interval: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            title: "Weather Dashboard".to_string(),
            native_options: None,
        }
    }
}
