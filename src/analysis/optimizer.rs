//! Layout generation
//!
//! Replaces the registry with a fixed number of zones whose types are drawn
//! from a priority-dependent weight profile and whose positions are sampled
//! from type-biased regions of the roof. All randomness comes from the
//! caller's RNG, so a seeded RNG reproduces the layout exactly.

use rand::Rng;

use crate::core::config::RegionalConfig;
use crate::core::error::{Result, RoofError};
use crate::core::types::{Priority, ZoneType};
use crate::roof::{RoofGeometry, Zone, ZoneRegistry};

/// Number of zones generated per layout
pub const LAYOUT_ZONE_COUNT: usize = 12;

/// Smallest generated zone side; sizes cycle through 3, 4, 5 m
const BASE_ZONE_SIZE: f64 = 3.0;
const ZONE_SIZE_STEPS: usize = 3;

/// Type weights in selection order
pub type WeightProfile = [(ZoneType, f64); 4];

/// Weight profile for a priority
pub fn weight_profile(priority: Priority) -> WeightProfile {
    match priority {
        Priority::Energy => [
            (ZoneType::Solar, 0.6),
            (ZoneType::Green, 0.2),
            (ZoneType::Water, 0.15),
            (ZoneType::Social, 0.05),
        ],
        Priority::Environment => [
            (ZoneType::Solar, 0.3),
            (ZoneType::Green, 0.5),
            (ZoneType::Water, 0.15),
            (ZoneType::Social, 0.05),
        ],
        Priority::Balanced => [
            (ZoneType::Solar, 0.4),
            (ZoneType::Green, 0.35),
            (ZoneType::Water, 0.15),
            (ZoneType::Social, 0.1),
        ],
    }
}

/// Pick a type with probability proportional to its weight
///
/// Draws r in [0, total) and returns the first type whose cumulative
/// weight reaches r. Falls back to the first entry if rounding leaves
/// nothing selected.
pub fn weighted_choice<R: Rng + ?Sized>(weights: &WeightProfile, rng: &mut R) -> ZoneType {
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    let r = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    for (zone_type, weight) in weights {
        cumulative += weight;
        if r <= cumulative {
            return *zone_type;
        }
    }

    weights[0].0
}

/// Sample a position (x, z) relative to the roof center for `zone_type`
///
/// Solar zones stay in the central 60% of the width and the positive-z
/// 40% of the length (south-facing side). Social zones use the central
/// 80% in both axes, green and water the central 70%.
pub fn sample_position<R: Rng + ?Sized>(
    zone_type: ZoneType,
    roof: &RoofGeometry,
    rng: &mut R,
) -> (f64, f64) {
    match zone_type {
        ZoneType::Solar => {
            let x = (rng.gen::<f64>() - 0.5) * roof.width() * 0.6;
            let z = rng.gen::<f64>() * roof.length() * 0.4;
            (x, z)
        }
        ZoneType::Social => {
            let x = (rng.gen::<f64>() - 0.5) * roof.width() * 0.8;
            let z = (rng.gen::<f64>() - 0.5) * roof.length() * 0.8;
            (x, z)
        }
        ZoneType::Green | ZoneType::Water => {
            let x = (rng.gen::<f64>() - 0.5) * roof.width() * 0.7;
            let z = (rng.gen::<f64>() - 0.5) * roof.length() * 0.7;
            (x, z)
        }
    }
}

/// Side length of the `index`-th generated zone (m)
pub fn layout_zone_size(index: usize) -> f64 {
    BASE_ZONE_SIZE + (index % ZONE_SIZE_STEPS) as f64
}

/// Clear `registry` and fill it with a generated layout
///
/// Fails with `NoRoofDefined` before touching the registry when there is
/// no roof.
pub fn optimize_layout<'a, R: Rng + ?Sized>(
    roof: Option<&RoofGeometry>,
    registry: &'a mut ZoneRegistry,
    config: &RegionalConfig,
    priority: Priority,
    rng: &mut R,
) -> Result<&'a [Zone]> {
    let roof = roof.ok_or(RoofError::NoRoofDefined)?;

    registry.clear();
    let weights = weight_profile(priority);

    for i in 0..LAYOUT_ZONE_COUNT {
        let zone_type = weighted_choice(&weights, rng);
        let (x, z) = sample_position(zone_type, roof, rng);
        let size = layout_zone_size(i);

        let zone = registry.add_zone(zone_type, x, z, size, Some(roof), config)?;
        tracing::trace!(
            "Layout zone {}: {} at ({:.2}, {:.2}) size {} efficiency {:.3}",
            i,
            zone_type,
            x,
            z,
            size,
            zone.efficiency()
        );
    }

    tracing::debug!(
        "Generated {} zones for {} priority",
        registry.len(),
        priority
    );

    Ok(registry.zones())
}
