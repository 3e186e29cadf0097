//! Human-readable analysis report

use crate::analysis::PerformanceMetrics;
use crate::core::types::ZoneType;
use crate::roof::{RoofGeometry, Zone};

fn zone_label(zone_type: ZoneType) -> &'static str {
    match zone_type {
        ZoneType::Solar => "Solar Panels",
        ZoneType::Green => "Green Roof",
        ZoneType::Water => "Water Management",
        ZoneType::Social => "Social Spaces",
    }
}

fn format_payback(years: f64) -> String {
    if years.is_finite() {
        format!("{:.1} years", years)
    } else {
        "never (no energy savings)".to_string()
    }
}

/// Short metrics summary, one line per figure
pub fn render_summary(metrics: &PerformanceMetrics) -> String {
    let mut out = String::from("Performance Summary:\n");
    out.push_str(&format!("- Energy: {:.0} kWh/year\n", metrics.energy_kwh_year));
    out.push_str(&format!(
        "- CO₂ Reduction: {:.1} tons/year\n",
        metrics.co2_reduction_tons
    ));
    out.push_str(&format!("- Investment: €{:.0}\n", metrics.cost_estimate));
    out.push_str(&format!("- Payback: {}\n", format_payback(metrics.payback_years)));
    out
}

/// Full report: roof specification, zone distribution, metrics, zone list
pub fn render_report(roof: &RoofGeometry, zones: &[Zone], metrics: &PerformanceMetrics) -> String {
    let mut out = String::new();

    out.push_str("\n3D ROOF ANALYSIS REPORT\n");
    out.push_str("=======================\n\n");

    out.push_str("Roof Specifications:\n");
    out.push_str(&format!(
        "- Dimensions: {}m × {}m\n",
        roof.width(),
        roof.length()
    ));
    out.push_str(&format!("- Pitch: {}°\n", roof.pitch()));
    out.push_str(&format!("- Peak Height: {:.1}m\n", roof.height()));
    out.push_str(&format!("- Total Surface Area: {:.1}m²\n\n", roof.area()));

    out.push_str("Zone Distribution:\n");
    for zone_type in ZoneType::ALL {
        out.push_str(&format!(
            "- {}: {:.1}m² ({:.1}%)\n",
            zone_label(zone_type),
            metrics.area_of(zone_type),
            metrics.share_percent(zone_type)
        ));
    }
    out.push('\n');

    out.push_str("Performance Metrics:\n");
    out.push_str(&format!(
        "- Energy Production: {:.0} kWh/year\n",
        metrics.energy_kwh_year
    ));
    out.push_str(&format!(
        "- Water Retention: {:.1} m³/year\n",
        metrics.water_retention_m3
    ));
    out.push_str(&format!(
        "- CO₂ Reduction: {:.1} tons/year\n",
        metrics.co2_reduction_tons
    ));
    out.push_str(&format!("- Investment Cost: €{:.0}\n", metrics.cost_estimate));
    out.push_str(&format!(
        "- Payback Period: {}\n\n",
        format_payback(metrics.payback_years)
    ));

    out.push_str("Zone Details:\n");
    for (i, zone) in zones.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} Zone: {:.1}m² (efficiency: {:.2})\n",
            i + 1,
            zone.zone_type().title(),
            zone.area(),
            zone.efficiency()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::calculate_performance;
    use crate::core::config::RegionalConfig;
    use crate::roof::ZoneRegistry;

    #[test]
    fn test_report_sections_and_zone_lines() {
        let config = RegionalConfig::default();
        let roof = RoofGeometry::new(50.0, 40.0, 15.0).unwrap();
        let mut registry = ZoneRegistry::new();
        registry.add_zone(ZoneType::Solar, 0.0, 5.0, 5.0, Some(&roof), &config).unwrap();
        registry.add_zone(ZoneType::Water, 3.0, -3.0, 4.0, Some(&roof), &config).unwrap();
        let metrics = calculate_performance(Some(&roof), &registry, &config).unwrap();

        let report = render_report(&roof, registry.zones(), &metrics);
        assert!(report.contains("3D ROOF ANALYSIS REPORT"));
        assert!(report.contains("- Dimensions: 50m × 40m"));
        assert!(report.contains("- Pitch: 15°"));
        assert!(report.contains("- Peak Height: 6.7m"));
        assert!(report.contains("- Energy Production: 3315 kWh/year"));
        assert!(report.contains("  1. Solar Zone: 25.0m² (efficiency: 0.78)"));
        assert!(report.contains("  2. Water Zone: 16.0m² (efficiency: 1.00)"));
    }

    #[test]
    fn test_infinite_payback_is_spelled_out() {
        let config = RegionalConfig::default();
        let roof = RoofGeometry::new(20.0, 20.0, 30.0).unwrap();
        let metrics = calculate_performance(Some(&roof), &ZoneRegistry::new(), &config).unwrap();

        let summary = render_summary(&metrics);
        assert!(summary.contains("- Payback: never (no energy savings)"));
        assert!(!summary.contains("inf"));
    }
}
