//! Roof Retrofit - pitched roof geometry, functional zones and performance estimates

pub mod analysis;
pub mod core;
pub mod output;
pub mod roof;

pub use crate::analysis::{PerformanceMetrics, RoofAnalyzer};
pub use crate::core::{Priority, RegionalConfig, Result, RoofError, ZoneType};
pub use crate::roof::{RoofGeometry, Zone, ZoneRegistry};
