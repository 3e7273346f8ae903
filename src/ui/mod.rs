pub mod report;

pub use report::{render_advisory, render_crop_table, render_soil_report};
