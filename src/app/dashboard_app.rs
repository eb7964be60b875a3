//! The dashboard application: event ingestion, state and frame layout.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use chrono::{DateTime, Local};
use eframe::egui;
use egui_phosphor::regular::{GEAR, WARNING};

use crate::client::PollEvent;
use crate::data::history::HistoryEntry;
use crate::data::metric::Metric;
use crate::data::reading::Reading;
use crate::data::settings::{AxisSettingsMap, DisplaySettings};
use crate::format::format_last_update;
use crate::panels::{metric_cards, ChartPanel, SettingsPanel};
use crate::persistence::PreferenceStore;

/// Top-level eframe application for the dashboard.
///
/// All state lives on the UI thread; the poll thread only talks to it
/// through the [`PollEvent`] channel, drained once per frame.
pub struct DashboardApp {
    rx: Receiver<PollEvent>,

    // ── Preferences ──
    store: Option<PreferenceStore>,
    settings: DisplaySettings,
    axis_settings: AxisSettingsMap,

    // ── Live data ──
    current: Option<Reading>,
    history: Vec<HistoryEntry>,
    error: Option<String>,
    last_update: Option<DateTime<Local>>,

    // ── Panels ──
    settings_panel: SettingsPanel,
    charts: [ChartPanel; 3],
}

impl DashboardApp {
    /// Create the app, loading persisted preferences from the default
    /// store. Without a usable `$HOME` the dashboard still runs, it just
    /// forgets its preferences on exit.
    pub fn new(rx: Receiver<PollEvent>) -> Self {
        let store = match PreferenceStore::from_home() {
            Ok(store) => Some(store),
            Err(e) => {
                log::warn!("Preferences disabled: {}", e);
                None
            }
        };
        Self::with_store(rx, store)
    }

    /// Create the app against an explicit preference store, or none.
    pub fn with_store(rx: Receiver<PollEvent>, store: Option<PreferenceStore>) -> Self {
        let settings = store
            .as_ref()
            .map(|s| s.load_display_settings())
            .unwrap_or_default();
        let axis_settings = store
            .as_ref()
            .map(|s| s.load_axis_settings())
            .unwrap_or_default();
        Self {
            rx,
            store,
            settings,
            axis_settings,
            current: None,
            history: Vec::new(),
            error: None,
            last_update: None,
            settings_panel: SettingsPanel::new(),
            charts: [
                ChartPanel::new(Metric::Temperature),
                ChartPanel::new(Metric::Humidity),
                ChartPanel::new(Metric::Pressure),
            ],
        }
    }

    /// Drain all pending poll events into app state.
    fn drain_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                PollEvent::Current(reading) => {
                    self.current = Some(reading);
                    self.last_update = Some(Local::now());
                    self.error = None;
                }
                PollEvent::History(entries) => {
                    log::debug!("Received {} history entries", entries.len());
                    self.history = entries;
                }
                PollEvent::Error(message) => {
                    self.error = Some(message);
                }
            }
        }
    }

    fn save_display_settings(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save_display_settings(&self.settings) {
                log::warn!("Failed to save display settings: {}", e);
            }
        }
    }

    fn save_axis_settings(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save_axis_settings(&self.axis_settings) {
                log::warn!("Failed to save axis settings: {}", e);
            }
        }
    }

    fn header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Weather Dashboard");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let open = self.settings_panel.is_open();
                    if ui
                        .selectable_label(open, format!("{GEAR} Settings"))
                        .clicked()
                    {
                        self.settings_panel.toggle(&self.settings);
                    }
                    ui.label(format!(
                        "Last update: {}",
                        format_last_update(self.last_update, Local::now())
                    ));
                });
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        self.header(ctx);

        if self.settings_panel.show(ctx, &mut self.settings) {
            self.save_display_settings();
        }

        let mut axis_changed = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(error) = &self.error {
                    ui.colored_label(
                        ui.visuals().error_fg_color,
                        format!("{WARNING} {}", error),
                    );
                    ui.add_space(4.0);
                }

                metric_cards(ui, self.current.as_ref(), &self.settings);
                ui.add_space(8.0);

                for chart in &mut self.charts {
                    let metric = chart.metric();
                    axis_changed |= chart.ui(
                        ui,
                        &self.history,
                        &self.settings,
                        self.axis_settings.get_mut(metric),
                    );
                    ui.add_space(8.0);
                }
            });
        });
        if axis_changed {
            self.save_axis_settings();
        }

        // The header's relative timestamp has to tick even when no new
        // data arrives.
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}
