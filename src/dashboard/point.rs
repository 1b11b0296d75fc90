use crate::telemetry::record::{RiskClass, SatelliteRecord};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

const COLOR_DANGER: &str = "#ff003c";
const COLOR_MANNED: &str = "#00ff88";
const COLOR_STARLINK: &str = "#ffae00";
const COLOR_GPS: &str = "#00f3ff";
const COLOR_DEFAULT: &str = "#ffffff";

/// A single renderable location handed to the globe boundary: position in
/// latitude/longitude/altitude, a visual color, and a label.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    lat: f64,
    lng: f64,
    /// Altitude in Earth radii, floored so low orbits stay visible above
    /// the surface.
    alt: f64,
    size: f64,
    color: &'static str,
    label: String,
}

impl PointFeature {
    pub fn from_record(record: &SatelliteRecord) -> Self {
        Self {
            lat: record.lat(),
            lng: record.lon(),
            alt: (record.alt() / EARTH_RADIUS_KM).max(0.01),
            size: 0.5,
            color: satellite_color(record.name(), record.risk()),
            label: record.name().to_string(),
        }
    }

    pub fn lat(&self) -> f64 { self.lat }
    pub fn lng(&self) -> f64 { self.lng }
    pub fn alt(&self) -> f64 { self.alt }
    pub fn size(&self) -> f64 { self.size }
    pub fn color(&self) -> &'static str { self.color }
    pub fn label(&self) -> &str { &self.label }
}

/// Display heuristic only, not an authoritative classification: a high risk
/// rating overrides, then well-known name substrings pick the constellation
/// color.
pub fn satellite_color(name: &str, risk: Option<RiskClass>) -> &'static str {
    if risk == Some(RiskClass::High) {
        return COLOR_DANGER;
    }
    let n = name.to_lowercase();
    if n.contains("iss") {
        COLOR_MANNED
    } else if n.contains("starlink") {
        COLOR_STARLINK
    } else if n.contains("gps") {
        COLOR_GPS
    } else {
        COLOR_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::{PointFeature, satellite_color};
    use crate::telemetry::record::{RiskClass, SatelliteRecord};

    fn record(name: &str, alt: f64, risk: Option<&str>) -> SatelliteRecord {
        let mut value = serde_json::json!({
            "name": name,
            "norad_id": 1,
            "lat": 45.5,
            "lon": -122.6,
            "alt": alt,
        });
        if let Some(risk) = risk {
            value["risk"] = serde_json::json!(risk);
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn high_risk_overrides_name_heuristic() {
        assert_eq!(satellite_color("ISS (ZARYA)", Some(RiskClass::High)), "#ff003c");
    }

    #[test]
    fn name_substrings_pick_constellation_colors() {
        assert_eq!(satellite_color("ISS (ZARYA)", None), "#00ff88");
        assert_eq!(satellite_color("STARLINK-3042", Some(RiskClass::Nominal)), "#ffae00");
        assert_eq!(satellite_color("GPS IIF-3", None), "#00f3ff");
        assert_eq!(satellite_color("COSMOS 2251 DEB", None), "#ffffff");
        // Matching is case-insensitive on the free-text name.
        assert_eq!(satellite_color("Starlink-30000", None), "#ffae00");
    }

    #[test]
    fn altitude_scales_to_earth_radii_with_floor() {
        let leo = PointFeature::from_record(&record("ISS", 400.0, None));
        assert!((leo.alt() - 400.0 / 6371.0).abs() < 1e-12);

        // A surface-hugging object still renders above the globe.
        let grounded = PointFeature::from_record(&record("BALLOON", 10.0, None));
        assert!((grounded.alt() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn feature_carries_label_and_position() {
        let point = PointFeature::from_record(&record("GPS IIF-3", 20180.0, None));
        assert_eq!(point.label(), "GPS IIF-3");
        assert!((point.lat() - 45.5).abs() < 1e-12);
        assert!((point.lng() + 122.6).abs() < 1e-12);
        assert!((point.size() - 0.5).abs() < 1e-12);
    }
}
