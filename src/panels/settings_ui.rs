//! The settings dialog: units, decimal places and calibration.

use eframe::egui::{self, Context, DragValue, RichText, Ui};

use crate::data::metric::Metric;
use crate::data::settings::{DisplaySettings, MAX_DECIMAL_PLACES};
use crate::data::units::{PressureUnit, TemperatureUnit};

/// Settings window working on a draft copy.
///
/// Edits touch only the draft. `Save` publishes it to the caller,
/// `Cancel` or closing the window discards it, `Reset to Default`
/// rewinds the draft without saving.
pub struct SettingsPanel {
    open: bool,
    draft: DisplaySettings,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self {
            open: false,
            draft: DisplaySettings::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle visibility; opening seeds the draft from the live settings.
    pub fn toggle(&mut self, live: &DisplaySettings) {
        if !self.open {
            self.draft = *live;
        }
        self.open = !self.open;
    }

    /// Show the window. Returns `true` when the user saved, in which
    /// case `live` holds the draft and the caller should persist it.
    pub fn show(&mut self, ctx: &Context, live: &mut DisplaySettings) -> bool {
        if !self.open {
            return false;
        }
        let mut open = self.open;
        let mut saved = false;
        let mut cancelled = false;
        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                self.draft_ui(ui);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Reset to Default").clicked() {
                        self.draft = DisplaySettings::default();
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Save").clicked() {
                            *live = self.draft;
                            saved = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancelled = true;
                        }
                    });
                });
            });
        self.open = open && !saved && !cancelled;
        saved
    }

    fn draft_ui(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Units").strong());
        ui.horizontal(|ui| {
            ui.label("Temperature");
            for unit in TemperatureUnit::ALL {
                ui.radio_value(&mut self.draft.temperature_unit, unit, unit.symbol());
            }
        });
        ui.horizontal(|ui| {
            ui.label("Pressure");
            for unit in PressureUnit::ALL {
                ui.radio_value(&mut self.draft.pressure_unit, unit, unit.symbol());
            }
        });

        ui.add_space(8.0);
        ui.label(RichText::new("Decimal Places").strong());
        egui::Grid::new("decimal_places")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for metric in Metric::ALL {
                    ui.label(metric.label());
                    ui.add(
                        DragValue::new(self.draft.decimal_places.get_mut(metric))
                            .range(0..=MAX_DECIMAL_PLACES),
                    );
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.label(RichText::new("Calibration").strong());
        egui::Grid::new("calibration")
            .num_columns(5)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for metric in Metric::ALL {
                    let coefficients = self.draft.calibration.get_mut(metric);
                    ui.label(metric.label());
                    ui.label("Scale");
                    ui.add(DragValue::new(&mut coefficients.scale).speed(0.1));
                    ui.label("Offset");
                    ui.add(DragValue::new(&mut coefficients.offset).speed(0.1));
                    ui.end_row();
                }
            });
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}
