//! Roof analysis
//!
//! Metrics engine, layout optimizer and the `RoofAnalyzer` that drives both.

pub mod analyzer;
pub mod metrics;
pub mod optimizer;

pub use analyzer::RoofAnalyzer;
pub use metrics::{calculate_performance, payback_years, PerformanceMetrics};
pub use optimizer::{optimize_layout, weight_profile, LAYOUT_ZONE_COUNT};
