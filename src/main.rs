//! Native weather-station dashboard.
//!
//! The station base URL comes from the first CLI argument, falling back
//! to the `STATIONVIEW_URL` environment variable, then to localhost.

use stationview::{run_dashboard, DashboardConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut cfg = DashboardConfig::default();
    if let Some(url) = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("STATIONVIEW_URL").ok())
    {
        cfg.base_url = url;
    }

    run_dashboard(cfg)
}
