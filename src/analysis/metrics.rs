//! Performance metrics derived from a roof and its zones
//!
//! Metrics are a pure function of the current roof, registry and
//! regional config. Nothing is cached; call `calculate_performance`
//! again after the layout changes.

use serde::Serialize;

use crate::core::config::RegionalConfig;
use crate::core::error::{Result, RoofError};
use crate::core::types::ZoneType;
use crate::roof::{RoofGeometry, ZoneRegistry};

/// Snapshot of annual performance for one roof layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    /// Slanted roof surface area (m²)
    pub total_area: f64,
    pub solar_area: f64,
    pub green_area: f64,
    pub water_area: f64,
    pub social_area: f64,
    /// Annual solar production (kWh/year)
    pub energy_kwh_year: f64,
    /// Annual stormwater retained (m³/year)
    pub water_retention_m3: f64,
    /// Annual CO2 avoided plus sequestered (tons/year)
    pub co2_reduction_tons: f64,
    /// Installation cost (currency units)
    pub cost_estimate: f64,
    /// Years until energy savings repay the cost; infinite without savings
    pub payback_years: f64,
}

impl PerformanceMetrics {
    pub fn area_of(&self, zone_type: ZoneType) -> f64 {
        match zone_type {
            ZoneType::Solar => self.solar_area,
            ZoneType::Green => self.green_area,
            ZoneType::Water => self.water_area,
            ZoneType::Social => self.social_area,
        }
    }

    /// Area covered by zones of any type (m²)
    pub fn zoned_area(&self) -> f64 {
        self.solar_area + self.green_area + self.water_area + self.social_area
    }

    /// Share of the roof surface covered by `zone_type`, in percent
    pub fn share_percent(&self, zone_type: ZoneType) -> f64 {
        if self.total_area > 0.0 {
            self.area_of(zone_type) / self.total_area * 100.0
        } else {
            0.0
        }
    }

    pub fn pays_back(&self) -> bool {
        self.payback_years.is_finite()
    }
}

/// Compute metrics for `registry` on `roof`
///
/// Fails with `NoRoofDefined` when no roof has been created.
pub fn calculate_performance(
    roof: Option<&RoofGeometry>,
    registry: &ZoneRegistry,
    config: &RegionalConfig,
) -> Result<PerformanceMetrics> {
    let roof = roof.ok_or(RoofError::NoRoofDefined)?;

    let mut areas = [0.0_f64; 4];
    let mut energy = 0.0;
    for zone in registry.iter() {
        areas[zone.zone_type().index()] += zone.area();
        if zone.zone_type() == ZoneType::Solar {
            energy += solar_yield_kwh(zone.area(), zone.efficiency(), config);
        }
    }

    let solar_area = areas[ZoneType::Solar.index()];
    let green_area = areas[ZoneType::Green.index()];
    let water_area = areas[ZoneType::Water.index()];
    let social_area = areas[ZoneType::Social.index()];

    let water_retention =
        (green_area + water_area) * config.rainfall_mm / 1000.0 * config.retention_fraction;

    let co2_from_solar = energy * config.grid_co2_kg_per_kwh / 1000.0;
    let co2_from_green = green_area * config.green_sequestration_tons_m2;

    let cost: f64 = ZoneType::ALL
        .iter()
        .map(|t| areas[t.index()] * config.costs.per_m2(*t))
        .sum();

    let annual_savings = energy * config.electricity_price_per_kwh;

    Ok(PerformanceMetrics {
        total_area: roof.area(),
        solar_area,
        green_area,
        water_area,
        social_area,
        energy_kwh_year: energy,
        water_retention_m3: water_retention,
        co2_reduction_tons: co2_from_solar + co2_from_green,
        cost_estimate: cost,
        payback_years: payback_years(cost, annual_savings),
    })
}

/// Annual yield of one solar zone (kWh/year)
pub fn solar_yield_kwh(area: f64, efficiency: f64, config: &RegionalConfig) -> f64 {
    area * config.solar_irradiance_kwh_m2
        * config.panel_efficiency
        * efficiency
        * (1.0 - config.system_losses)
}

/// Years to recover `cost` from `annual_savings`
///
/// Zero or negative savings never pay back and yield `f64::INFINITY`.
pub fn payback_years(cost: f64, annual_savings: f64) -> f64 {
    if annual_savings > 0.0 {
        cost / annual_savings
    } else {
        f64::INFINITY
    }
}
