//! Roof zones and their position-dependent efficiency

use serde::Serialize;

use crate::core::config::RegionalConfig;
use crate::core::types::ZoneType;
use crate::roof::geometry::RoofGeometry;

/// A square footprint on the roof assigned one functional use
///
/// Position is relative to the roof center and is not clamped to the
/// footprint. Area and efficiency are fixed when the zone is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zone {
    #[serde(rename = "type")]
    zone_type: ZoneType,
    x: f64,
    z: f64,
    size: f64,
    area: f64,
    efficiency: f64,
}

impl Zone {
    pub(crate) fn new(zone_type: ZoneType, x: f64, z: f64, size: f64, efficiency: f64) -> Self {
        Self {
            zone_type,
            x,
            z,
            size,
            area: size * size,
            efficiency,
        }
    }

    pub fn zone_type(&self) -> ZoneType {
        self.zone_type
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Side length of the square (m)
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Footprint area, always `size²` (m²)
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }
}

/// Efficiency multiplier for a zone of `zone_type` placed at (x, z)
///
/// Solar zones lose output near the roof edges (shading) and when the
/// pitch is far from the optimal tilt. Green zones gain from steeper
/// pitch (drainage), up to a cap. Water and social zones are neutral.
/// Without a roof every zone is neutral.
pub fn zone_efficiency(
    zone_type: ZoneType,
    x: f64,
    z: f64,
    roof: Option<&RoofGeometry>,
    config: &RegionalConfig,
) -> f64 {
    let Some(roof) = roof else {
        return 1.0;
    };

    let mut efficiency = 1.0;

    match zone_type {
        ZoneType::Solar => {
            if roof.edge_distance(x, z) < config.edge_shading_distance_m {
                efficiency *= config.edge_shading_penalty;
            }
            let tilt_factor = 1.0 - (roof.pitch() - config.optimal_tilt_deg).abs() / 100.0;
            efficiency *= tilt_factor.max(config.min_tilt_factor);
        }
        ZoneType::Green => {
            let slope_factor = 1.0 + roof.pitch() / 100.0;
            efficiency *= slope_factor.min(config.max_green_slope_factor);
        }
        ZoneType::Water | ZoneType::Social => {}
    }

    efficiency
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_roof() -> RoofGeometry {
        RoofGeometry::new(50.0, 40.0, 15.0).unwrap()
    }

    #[test]
    fn test_zone_area_is_size_squared() {
        let zone = Zone::new(ZoneType::Water, 1.0, 2.0, 4.5, 1.0);
        assert_eq!(zone.area(), 20.25);
    }

    #[test]
    fn test_efficiency_without_roof_is_neutral() {
        let config = RegionalConfig::default();
        for zone_type in ZoneType::ALL {
            assert_eq!(zone_efficiency(zone_type, 0.0, 0.0, None, &config), 1.0);
        }
    }

    #[test]
    fn test_solar_tilt_only_away_from_edges() {
        let roof = reference_roof();
        let config = RegionalConfig::default();
        let efficiency = zone_efficiency(ZoneType::Solar, 0.0, 5.0, Some(&roof), &config);
        assert!((efficiency - 0.78).abs() < 1e-9);
    }

    #[test]
    fn test_solar_edge_penalty_stacks_with_tilt() {
        let roof = reference_roof();
        let config = RegionalConfig::default();
        // 1m from the x = +25 edge
        let efficiency = zone_efficiency(ZoneType::Solar, 24.0, 0.0, Some(&roof), &config);
        assert!((efficiency - 0.8 * 0.78).abs() < 1e-9);
    }

    #[test]
    fn test_solar_edge_threshold_is_exclusive() {
        let roof = reference_roof();
        let config = RegionalConfig::default();
        // Exactly 2m from the x = +25 edge: tilt factor only
        let at_threshold = zone_efficiency(ZoneType::Solar, 23.0, 0.0, Some(&roof), &config);
        assert!((at_threshold - 0.78).abs() < 1e-9);
        // Just inside the shading band
        let shaded = zone_efficiency(ZoneType::Solar, 23.01, 0.0, Some(&roof), &config);
        assert!((shaded - 0.8 * 0.78).abs() < 1e-9);
    }

    #[test]
    fn test_solar_tilt_factor_floors() {
        let roof = RoofGeometry::new(50.0, 40.0, 80.0).unwrap();
        let config = RegionalConfig::default();
        // |80 - 37| / 100 = 0.43 -> 0.57, floored to 0.7
        let efficiency = zone_efficiency(ZoneType::Solar, 0.0, 0.0, Some(&roof), &config);
        assert!((efficiency - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_green_slope_bonus_is_capped() {
        let config = RegionalConfig::default();
        let gentle = RoofGeometry::new(50.0, 40.0, 15.0).unwrap();
        let steep = RoofGeometry::new(50.0, 40.0, 45.0).unwrap();
        let gentle_eff = zone_efficiency(ZoneType::Green, 0.0, 0.0, Some(&gentle), &config);
        let steep_eff = zone_efficiency(ZoneType::Green, 0.0, 0.0, Some(&steep), &config);
        assert!((gentle_eff - 1.15).abs() < 1e-9);
        assert!((steep_eff - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_water_and_social_are_neutral() {
        let roof = reference_roof();
        let config = RegionalConfig::default();
        assert_eq!(zone_efficiency(ZoneType::Water, 24.9, 19.9, Some(&roof), &config), 1.0);
        assert_eq!(zone_efficiency(ZoneType::Social, 0.0, 0.0, Some(&roof), &config), 1.0);
    }

    proptest! {
        #[test]
        fn prop_solar_efficiency_bounds(
            pitch in 0.0f64..89.9,
            x in -40.0f64..40.0,
            z in -30.0f64..30.0,
        ) {
            let roof = RoofGeometry::new(50.0, 40.0, pitch).unwrap();
            let config = RegionalConfig::default();
            let efficiency = zone_efficiency(ZoneType::Solar, x, z, Some(&roof), &config);
            prop_assert!(efficiency >= 0.56 - 1e-12);
            prop_assert!(efficiency <= 1.0 + 1e-12);

            if roof.edge_distance(x, z) >= 2.0 {
                let tilt = (1.0 - (pitch - 37.0).abs() / 100.0).max(0.7);
                prop_assert!((efficiency - tilt).abs() < 1e-12);
            }
        }

        #[test]
        fn prop_green_efficiency_bounds(pitch in 0.0f64..89.9) {
            let roof = RoofGeometry::new(50.0, 40.0, pitch).unwrap();
            let config = RegionalConfig::default();
            let efficiency = zone_efficiency(ZoneType::Green, 0.0, 0.0, Some(&roof), &config);
            prop_assert!((1.0..=1.2).contains(&efficiency));
        }

        #[test]
        fn prop_zone_area_matches_size(size in 0.01f64..100.0) {
            let zone = Zone::new(ZoneType::Social, 0.0, 0.0, size, 1.0);
            prop_assert_eq!(zone.area(), size * size);
            prop_assert!(zone.area() >= 0.0);
        }
    }
}
