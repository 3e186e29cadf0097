//! Gable roof geometry
//!
//! A roof is described by its footprint (width across the ridge, length
//! along it) and its pitch. Peak height and slanted surface area are
//! derived once at construction and never set independently.

use serde::Serialize;

use crate::core::error::{Result, RoofError};

/// Pitched roof with two equal slopes meeting at a ridge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoofGeometry {
    width: f64,
    length: f64,
    pitch: f64,
    height: f64,
    area: f64,
}

impl RoofGeometry {
    /// Build a roof from footprint dimensions (m) and pitch (degrees)
    ///
    /// Width and length must be positive and finite; pitch must lie in
    /// [0, 90). A pitch of 0 is a flat roof whose area equals the footprint.
    pub fn new(width: f64, length: f64, pitch: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(RoofError::InvalidDimensions(format!(
                "width must be positive, got {}",
                width
            )));
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(RoofError::InvalidDimensions(format!(
                "length must be positive, got {}",
                length
            )));
        }
        if !(0.0..90.0).contains(&pitch) {
            return Err(RoofError::InvalidDimensions(format!(
                "pitch must be within [0, 90) degrees, got {}",
                pitch
            )));
        }

        let half_width = width / 2.0;
        let height = pitch.to_radians().tan() * half_width;
        let slope_length = half_width.hypot(height);
        let area = 2.0 * slope_length * length;
        if !area.is_finite() {
            return Err(RoofError::InvalidDimensions(format!(
                "surface area overflows for width {} and length {}",
                width, length
            )));
        }

        Ok(Self {
            width,
            length,
            pitch,
            height,
            area,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Pitch in degrees from horizontal
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Ridge height above the eaves (m)
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Total slanted surface area of both slopes (m²)
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Length of one slope from eave to ridge (m)
    pub fn slope_length(&self) -> f64 {
        self.area / (2.0 * self.length)
    }

    /// Distance from a point (relative to the roof center) to the nearest
    /// footprint edge. Points outside the footprint are measured the same way.
    pub fn edge_distance(&self, x: f64, z: f64) -> f64 {
        let half_width = self.width / 2.0;
        let half_length = self.length / 2.0;
        (x + half_width)
            .abs()
            .min((x - half_width).abs())
            .min((z + half_length).abs())
            .min((z - half_length).abs())
    }
}
