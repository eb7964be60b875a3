//! Top-level entry point for running the dashboard as a native window.

use eframe::egui;

use crate::client::spawn_poller;
use crate::config::DashboardConfig;

use super::dashboard_app::DashboardApp;

/// Launch the dashboard in a native window.
///
/// Spawns the background poll thread, builds the app with persisted
/// preferences, and blocks in the eframe event loop until the window is
/// closed.
pub fn run_dashboard(mut cfg: DashboardConfig) -> eframe::Result<()> {
    let rx = spawn_poller(&cfg);
    let app = DashboardApp::new(rx);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1000.0, 860.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
