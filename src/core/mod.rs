pub mod config;
pub mod error;
pub mod types;

pub use config::{RegionalConfig, ZoneCosts};
pub use error::{Result, RoofError};
pub use types::{Priority, ZoneType};
