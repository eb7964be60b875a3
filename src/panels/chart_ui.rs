//! One history chart card: the plot, tick labels and the axis editor.

use eframe::egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular::SLIDERS_HORIZONTAL;
use egui_plot::{Line, Plot, Points};

use crate::data::domain::{
    auto_domain, resolve_x_domain, resolve_y_domain, round_domain_to_whole, AxisBound,
    ResolvedDomain,
};
use crate::data::history::HistoryEntry;
use crate::data::metric::Metric;
use crate::data::pipeline::display_value;
use crate::data::settings::{AxisSettings, DisplaySettings};
use crate::format::{format_tick, format_value, parse_date_input, parse_number_input};

fn metric_color(metric: Metric) -> Color32 {
    match metric {
        Metric::Temperature => Color32::from_rgb(0xef, 0x44, 0x44),
        Metric::Humidity => Color32::from_rgb(0x3b, 0x82, 0xf6),
        Metric::Pressure => Color32::from_rgb(0x10, 0xb9, 0x81),
    }
}

/// Materialize a resolved domain into plot bounds.
///
/// Auto sides fall back to the given extent. Returns `None` when a side
/// stays unknown or the range is degenerate; the plot then fits itself.
fn concrete_bounds(domain: ResolvedDomain, fallback: ResolvedDomain) -> Option<(f64, f64)> {
    let lo = domain.min.value().or(fallback.min.value())?;
    let hi = domain.max.value().or(fallback.max.value())?;
    if lo < hi {
        Some((lo, hi))
    } else {
        None
    }
}

/// Chart card for one metric, with a collapsible axis-override editor.
pub struct ChartPanel {
    metric: Metric,
    show_axis_editor: bool,
}

impl ChartPanel {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            show_axis_editor: false,
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Render the card. Returns `true` when the user edited the axis
    /// overrides this frame; the caller persists them.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        history: &[HistoryEntry],
        settings: &DisplaySettings,
        axis: &mut AxisSettings,
    ) -> bool {
        // X and Y are filtered independently: an entry with a bad
        // timestamp still contributes to the Y extent and vice versa.
        let mut xs = Vec::with_capacity(history.len());
        let mut ys = Vec::with_capacity(history.len());
        let mut points = Vec::with_capacity(history.len());
        for entry in history {
            let x = entry.timestamp_ms;
            if x.is_finite() {
                xs.push(x);
            }
            if let Some(y) = display_value(self.metric, entry.values.get(self.metric), settings) {
                if y.is_finite() {
                    ys.push(y);
                    if x.is_finite() {
                        points.push([x, y]);
                    }
                }
            }
        }

        let mut changed = false;
        egui::Frame::group(ui.style())
            .inner_margin(12)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{} History", self.metric.label())).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(format!("{SLIDERS_HORIZONTAL} Axis Settings"))
                            .clicked()
                        {
                            self.show_axis_editor = !self.show_axis_editor;
                        }
                    });
                });
                if self.show_axis_editor {
                    let base_y = round_domain_to_whole(auto_domain(ys.iter().copied()));
                    changed = self.axis_editor(ui, base_y, axis);
                    ui.add_space(4.0);
                }
                self.plot(ui, &xs, &ys, points, settings, axis);
            });
        changed
    }

    fn axis_editor(&mut self, ui: &mut Ui, base_y: ResolvedDomain, axis: &mut AxisSettings) -> bool {
        let y_hint = |bound: AxisBound| match bound.value() {
            Some(value) => format!("{}", value),
            None => "auto".to_string(),
        };

        let mut changed = false;
        egui::Grid::new(("axis_editor", self.metric.label()))
            .num_columns(4)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("X min");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut axis.x_min)
                            .hint_text("YYYY-MM-DD HH:MM")
                            .desired_width(140.0),
                    )
                    .changed();
                ui.label("X max");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut axis.x_max)
                            .hint_text("YYYY-MM-DD HH:MM")
                            .desired_width(140.0),
                    )
                    .changed();
                ui.end_row();

                ui.label("Y min");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut axis.y_min)
                            .hint_text(y_hint(base_y.min))
                            .desired_width(140.0),
                    )
                    .changed();
                ui.label("Y max");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut axis.y_max)
                            .hint_text(y_hint(base_y.max))
                            .desired_width(140.0),
                    )
                    .changed();
                ui.end_row();
            });
        if ui.button("Reset to auto").clicked() {
            axis.reset();
            changed = true;
        }
        changed
    }

    fn plot(
        &self,
        ui: &mut Ui,
        xs: &[f64],
        ys: &[f64],
        points: Vec<[f64; 2]>,
        settings: &DisplaySettings,
        axis: &AxisSettings,
    ) {
        let x_domain = resolve_x_domain(
            xs.iter().copied(),
            parse_date_input(&axis.x_min),
            parse_date_input(&axis.x_max),
        );
        let y_domain = resolve_y_domain(
            ys.iter().copied(),
            parse_number_input(&axis.y_min),
            parse_number_input(&axis.y_max),
        );
        // A partial X override leaves the other side on the data extent.
        let x_auto = auto_domain(xs.iter().copied());
        let x_bounds = concrete_bounds(x_domain, x_auto);
        let y_bounds = concrete_bounds(y_domain, ResolvedDomain::AUTO);

        let label = self.metric.label();
        let symbol = settings.unit_symbol(self.metric);
        let places = settings.decimal_places.clamped(self.metric);
        let color = metric_color(self.metric);

        Plot::new(egui::Id::new(("history_plot", label)))
            .height(240.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_formatter(|x, _range| format_tick(x.value))
            .label_formatter(move |name, point| {
                if name.is_empty() {
                    format_tick(point.x)
                } else {
                    format!(
                        "{}: {} {}\n{}",
                        name,
                        format_value(point.y, places),
                        symbol,
                        format_tick(point.x)
                    )
                }
            })
            .show(ui, |plot_ui| {
                if let Some((lo, hi)) = x_bounds {
                    plot_ui.set_plot_bounds_x(lo..=hi);
                }
                if let Some((lo, hi)) = y_bounds {
                    plot_ui.set_plot_bounds_y(lo..=hi);
                }
                plot_ui.line(Line::new(label, points.clone()).color(color).width(2.0));
                plot_ui.points(Points::new(label, points).radius(3.0).color(color));
            });
    }
}
