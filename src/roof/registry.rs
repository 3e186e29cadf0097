//! Ordered collection of zones placed on a roof

use crate::core::config::RegionalConfig;
use crate::core::error::{Result, RoofError};
use crate::core::types::ZoneType;
use crate::roof::geometry::RoofGeometry;
use crate::roof::zone::{zone_efficiency, Zone};

/// Zones in insertion order
///
/// No deduplication, overlap checks or bounds checks: zones are
/// identified only by their position in the sequence.
#[derive(Debug, Clone, Default)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a zone, computing its efficiency against `roof`, and append it
    pub fn add_zone(
        &mut self,
        zone_type: ZoneType,
        x: f64,
        z: f64,
        size: f64,
        roof: Option<&RoofGeometry>,
        config: &RegionalConfig,
    ) -> Result<Zone> {
        if !size.is_finite() || size <= 0.0 {
            return Err(RoofError::InvalidZoneSize(size));
        }

        let efficiency = zone_efficiency(zone_type, x, z, roof, config);
        let zone = Zone::new(zone_type, x, z, size, efficiency);
        self.zones.push(zone);
        Ok(zone)
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Sum of zone areas for one type (m²)
    pub fn area_of(&self, zone_type: ZoneType) -> f64 {
        self.zones
            .iter()
            .filter(|z| z.zone_type() == zone_type)
            .map(|z| z.area())
            .sum()
    }

    /// Sum of all zone areas (m²)
    pub fn total_area(&self) -> f64 {
        self.zones.iter().map(|z| z.area()).sum()
    }
}
