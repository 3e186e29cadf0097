//! Roof analyzer
//!
//! Owns the current roof, its zones and the regional calibration, and
//! exposes the model operations as one unit. Callers embedding this in a
//! concurrent host must guard the whole analyzer: metrics read the roof and
//! registry together, and layout optimization clears and refills the registry.

use rand::Rng;
use std::path::Path;

use crate::analysis::metrics::{self, PerformanceMetrics};
use crate::analysis::optimizer;
use crate::core::config::RegionalConfig;
use crate::core::error::Result;
use crate::core::types::{Priority, ZoneType};
use crate::output::{render_report, RoofDesign};
use crate::roof::{RoofGeometry, Zone, ZoneRegistry};

#[derive(Debug, Clone, Default)]
pub struct RoofAnalyzer {
    roof: Option<RoofGeometry>,
    zones: ZoneRegistry,
    config: RegionalConfig,
}

impl RoofAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegionalConfig) -> Self {
        Self {
            roof: None,
            zones: ZoneRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &RegionalConfig {
        &self.config
    }

    pub fn roof(&self) -> Option<&RoofGeometry> {
        self.roof.as_ref()
    }

    pub fn zones(&self) -> &[Zone] {
        self.zones.zones()
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.zones
    }

    /// Replace the roof
    ///
    /// Existing zones were placed against the old footprint, so they are
    /// dropped. On invalid dimensions the previous roof and zones are kept.
    pub fn create_roof(&mut self, width: f64, length: f64, pitch: f64) -> Result<RoofGeometry> {
        let roof = RoofGeometry::new(width, length, pitch)?;

        if !self.zones.is_empty() {
            tracing::debug!(
                "Clearing {} zones placed on the previous roof",
                self.zones.len()
            );
            self.zones.clear();
        }

        tracing::debug!(
            "Created roof {}m x {}m, pitch {}°: height {:.2}m, area {:.1}m²",
            width,
            length,
            pitch,
            roof.height(),
            roof.area()
        );
        self.roof = Some(roof);
        Ok(roof)
    }

    /// Place a zone; efficiency is computed against the current roof
    pub fn add_zone(&mut self, zone_type: ZoneType, x: f64, z: f64, size: f64) -> Result<Zone> {
        self.zones
            .add_zone(zone_type, x, z, size, self.roof.as_ref(), &self.config)
    }

    pub fn calculate_performance(&self) -> Result<PerformanceMetrics> {
        metrics::calculate_performance(self.roof.as_ref(), &self.zones, &self.config)
    }

    /// Replace all zones with a generated layout for `priority`
    pub fn optimize_layout<R: Rng + ?Sized>(
        &mut self,
        priority: Priority,
        rng: &mut R,
    ) -> Result<&[Zone]> {
        optimizer::optimize_layout(
            self.roof.as_ref(),
            &mut self.zones,
            &self.config,
            priority,
            rng,
        )
    }

    /// Snapshot of roof, zones and (when a roof exists) metrics
    pub fn design(&self) -> Result<RoofDesign> {
        let performance = match self.roof {
            Some(_) => Some(self.calculate_performance()?),
            None => None,
        };
        Ok(RoofDesign {
            roof: self.roof,
            zones: self.zones.zones().to_vec(),
            performance,
        })
    }

    pub fn export_json(&self, path: &Path) -> Result<()> {
        self.design()?.write_json(path)
    }

    /// Full text report, or a placeholder when no roof exists
    pub fn generate_report(&self) -> Result<String> {
        let Some(roof) = self.roof.as_ref() else {
            return Ok("No roof design available".to_string());
        };
        let metrics = self.calculate_performance()?;
        Ok(render_report(roof, self.zones.zones(), &metrics))
    }
}
