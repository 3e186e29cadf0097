//! JSON export of a roof design

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::analysis::PerformanceMetrics;
use crate::core::error::Result;
use crate::roof::{RoofGeometry, Zone};

/// Flat dump of the current design
///
/// `performance` is present only when a roof exists. An infinite payback
/// period is written as `null`, since JSON has no infinity.
#[derive(Debug, Clone, Serialize)]
pub struct RoofDesign {
    pub roof: Option<RoofGeometry>,
    pub zones: Vec<Zone>,
    pub performance: Option<PerformanceMetrics>,
}

impl RoofDesign {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        tracing::info!("Roof design exported to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::calculate_performance;
    use crate::core::config::RegionalConfig;
    use crate::core::types::ZoneType;
    use crate::roof::ZoneRegistry;

    #[test]
    fn test_empty_design_has_null_roof_and_performance() {
        let design = RoofDesign {
            roof: None,
            zones: Vec::new(),
            performance: None,
        };
        let value: serde_json::Value = serde_json::from_str(&design.to_json().unwrap()).unwrap();
        assert!(value["roof"].is_null());
        assert!(value["performance"].is_null());
        assert_eq!(value["zones"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_field_names() {
        let config = RegionalConfig::default();
        let roof = RoofGeometry::new(50.0, 40.0, 15.0).unwrap();
        let mut registry = ZoneRegistry::new();
        registry.add_zone(ZoneType::Green, 1.0, 2.0, 3.0, Some(&roof), &config).unwrap();
        let performance = calculate_performance(Some(&roof), &registry, &config).unwrap();

        let design = RoofDesign {
            roof: Some(roof),
            zones: registry.zones().to_vec(),
            performance: Some(performance),
        };
        let value: serde_json::Value = serde_json::from_str(&design.to_json().unwrap()).unwrap();

        for key in ["width", "length", "pitch", "height", "area"] {
            assert!(value["roof"].get(key).is_some(), "roof.{} missing", key);
        }
        let zone = &value["zones"][0];
        assert_eq!(zone["type"], "green");
        assert_eq!(zone["size"], 3.0);
        assert_eq!(zone["area"], 9.0);
        assert!(zone.get("efficiency").is_some());

        let perf = &value["performance"];
        assert_eq!(perf["green_area"], 9.0);
        // No solar production: payback is infinite and exported as null
        assert!(perf["payback_years"].is_null());
    }
}
