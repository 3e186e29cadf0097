//! Export and reporting over the analysis results

pub mod export;
pub mod report;

pub use export::RoofDesign;
pub use report::{render_report, render_summary};
