//! Regional calibration constants
//!
//! Every empirical factor used by the efficiency model and the metrics
//! engine lives here, so a different climate or market only needs a new
//! config file. Defaults are calibrated for Denmark.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, RoofError};
use crate::core::types::ZoneType;

/// Installation cost per square meter of each zone type (currency units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoneCosts {
    pub solar: f64,
    pub green: f64,
    pub water: f64,
    pub social: f64,
}

impl Default for ZoneCosts {
    fn default() -> Self {
        Self {
            solar: 1500.0,
            green: 800.0,
            water: 600.0,
            social: 400.0,
        }
    }
}

impl ZoneCosts {
    pub fn per_m2(&self, zone_type: ZoneType) -> f64 {
        match zone_type {
            ZoneType::Solar => self.solar,
            ZoneType::Green => self.green,
            ZoneType::Water => self.water,
            ZoneType::Social => self.social,
        }
    }
}

/// Configuration for the roof performance model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegionalConfig {
    // === SOLAR YIELD ===
    /// Annual irradiance on the panel plane (kWh/m²/year)
    pub solar_irradiance_kwh_m2: f64,

    /// Fraction of irradiance converted by the panels
    pub panel_efficiency: f64,

    /// Fraction lost in inverters, wiring and soiling
    pub system_losses: f64,

    // === STORMWATER ===
    /// Annual rainfall (mm/year)
    pub rainfall_mm: f64,

    /// Fraction of rainfall on green/water zones that is retained
    pub retention_fraction: f64,

    // === CARBON ===
    /// Grid emission intensity avoided per kWh produced (kg CO2/kWh)
    pub grid_co2_kg_per_kwh: f64,

    /// Sequestration by green roof vegetation (tons CO2/m²/year)
    pub green_sequestration_tons_m2: f64,

    // === FINANCIAL ===
    /// Value of one produced kWh (currency/kWh)
    pub electricity_price_per_kwh: f64,

    /// Installation cost per m² by zone type
    pub costs: ZoneCosts,

    // === ZONE EFFICIENCY ===
    /// Panel tilt with the best annual yield at this latitude (degrees)
    pub optimal_tilt_deg: f64,

    /// Solar zones closer than this to a roof edge are shaded (m)
    pub edge_shading_distance_m: f64,

    /// Multiplier applied to shaded solar zones
    pub edge_shading_penalty: f64,

    /// Lower bound of the tilt factor
    ///
    /// The tilt factor drops 1% per degree away from `optimal_tilt_deg`
    /// and never goes below this value.
    pub min_tilt_factor: f64,

    /// Upper bound of the green roof slope bonus (1 + pitch/100)
    pub max_green_slope_factor: f64,
}

impl Default for RegionalConfig {
    fn default() -> Self {
        Self {
            solar_irradiance_kwh_m2: 1000.0,
            panel_efficiency: 0.20,
            system_losses: 0.15,

            rainfall_mm: 600.0,
            retention_fraction: 0.70,

            grid_co2_kg_per_kwh: 0.2,
            green_sequestration_tons_m2: 0.02,

            electricity_price_per_kwh: 0.25,
            costs: ZoneCosts::default(),

            optimal_tilt_deg: 37.0,
            edge_shading_distance_m: 2.0,
            edge_shading_penalty: 0.8,
            min_tilt_factor: 0.7,
            max_green_slope_factor: 1.2,
        }
    }
}

impl RegionalConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file and validate it
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded regional config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: RegionalConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("panel_efficiency", self.panel_efficiency),
            ("system_losses", self.system_losses),
            ("retention_fraction", self.retention_fraction),
            ("edge_shading_penalty", self.edge_shading_penalty),
            ("min_tilt_factor", self.min_tilt_factor),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(RoofError::InvalidConfig(format!(
                    "{} ({}) must be within [0, 1]",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("solar_irradiance_kwh_m2", self.solar_irradiance_kwh_m2),
            ("rainfall_mm", self.rainfall_mm),
            ("grid_co2_kg_per_kwh", self.grid_co2_kg_per_kwh),
            ("green_sequestration_tons_m2", self.green_sequestration_tons_m2),
            ("electricity_price_per_kwh", self.electricity_price_per_kwh),
            ("optimal_tilt_deg", self.optimal_tilt_deg),
            ("costs.solar", self.costs.solar),
            ("costs.green", self.costs.green),
            ("costs.water", self.costs.water),
            ("costs.social", self.costs.social),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(RoofError::InvalidConfig(format!(
                    "{} ({}) must be a non-negative number",
                    name, value
                )));
            }
        }

        if !self.edge_shading_distance_m.is_finite() || self.edge_shading_distance_m <= 0.0 {
            return Err(RoofError::InvalidConfig(format!(
                "edge_shading_distance_m ({}) must be positive",
                self.edge_shading_distance_m
            )));
        }

        if !self.max_green_slope_factor.is_finite() || self.max_green_slope_factor < 1.0 {
            return Err(RoofError::InvalidConfig(format!(
                "max_green_slope_factor ({}) must be at least 1.0",
                self.max_green_slope_factor
            )));
        }

        Ok(())
    }
}
