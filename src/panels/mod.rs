pub mod cards_ui;
pub mod chart_ui;
pub mod settings_ui;

pub use cards_ui::metric_cards;
pub use chart_ui::ChartPanel;
pub use settings_ui::SettingsPanel;
