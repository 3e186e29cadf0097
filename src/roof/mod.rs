//! Roof model
//!
//! Geometry of the pitched roof and the functional zones placed on it.

pub mod geometry;
pub mod registry;
pub mod zone;

pub use geometry::RoofGeometry;
pub use registry::ZoneRegistry;
pub use zone::{zone_efficiency, Zone};
