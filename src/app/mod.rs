//! Application shell for the dashboard.
//!
//! Split in two: `dashboard_app` holds the [`DashboardApp`] state and
//! per-frame layout, `run` opens the native window around it.

mod dashboard_app;
mod run;

pub use dashboard_app::DashboardApp;
pub use run::run_dashboard;
