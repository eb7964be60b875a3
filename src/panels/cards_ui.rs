//! The numeric metric cards across the top of the dashboard.

use eframe::egui::{self, RichText, Ui};

use crate::data::metric::Metric;
use crate::data::pipeline::display_value;
use crate::data::reading::Reading;
use crate::data::settings::DisplaySettings;
use crate::format::format_value;

/// Render the three metric cards in one row.
///
/// Each card shows the latest calibrated, converted value at the
/// configured precision, or a placeholder while no reading has arrived.
pub fn metric_cards(ui: &mut Ui, current: Option<&Reading>, settings: &DisplaySettings) {
    ui.columns(Metric::ALL.len(), |columns| {
        for (column, metric) in columns.iter_mut().zip(Metric::ALL) {
            metric_card(column, metric, current, settings);
        }
    });
}

fn metric_card(ui: &mut Ui, metric: Metric, current: Option<&Reading>, settings: &DisplaySettings) {
    egui::Frame::group(ui.style())
        .inner_margin(12)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(metric.label()).small().weak());
            ui.add_space(2.0);
            match current.and_then(|reading| display_value(metric, reading.get(metric), settings)) {
                Some(value) => {
                    let places = settings.decimal_places.clamped(metric);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format_value(value, places)).heading().strong());
                        ui.label(RichText::new(settings.unit_symbol(metric)).weak());
                    });
                }
                None => {
                    ui.label(RichText::new("--").heading().weak());
                }
            }
        });
}
