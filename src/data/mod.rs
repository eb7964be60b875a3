pub mod calibration;
pub mod domain;
pub mod history;
pub mod metric;
pub mod pipeline;
pub mod reading;
pub mod settings;
pub mod units;
