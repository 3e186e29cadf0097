//! Core type definitions shared by the roof model, metrics and optimizer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional use assigned to a zone on the roof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Solar,
    Green,
    Water,
    Social,
}

impl ZoneType {
    /// All zone types, in the order used for weight tables and aggregation
    pub const ALL: [ZoneType; 4] = [
        ZoneType::Solar,
        ZoneType::Green,
        ZoneType::Water,
        ZoneType::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Solar => "solar",
            ZoneType::Green => "green",
            ZoneType::Water => "water",
            ZoneType::Social => "social",
        }
    }

    /// Capitalized name for reports ("Solar", "Green", ...)
    pub fn title(&self) -> &'static str {
        match self {
            ZoneType::Solar => "Solar",
            ZoneType::Green => "Green",
            ZoneType::Water => "Water",
            ZoneType::Social => "Social",
        }
    }

    /// Index into per-type tables ordered like `ZoneType::ALL`
    pub fn index(&self) -> usize {
        match self {
            ZoneType::Solar => 0,
            ZoneType::Green => 1,
            ZoneType::Water => 2,
            ZoneType::Social => 3,
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optimization goal for layout generation
///
/// Parsing never fails: anything that is not `energy`, `environment`
/// or `balanced` is treated as `Balanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Energy,
    Environment,
    #[default]
    Balanced,
}

impl Priority {
    pub fn parse(value: &str) -> Self {
        match value {
            "energy" => Priority::Energy,
            "environment" => Priority::Environment,
            "balanced" => Priority::Balanced,
            other => {
                tracing::debug!("Unrecognized priority '{}', using balanced weights", other);
                Priority::Balanced
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Energy => "energy",
            Priority::Environment => "environment",
            Priority::Balanced => "balanced",
        }
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Priority::parse(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
