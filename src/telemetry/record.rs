use strum_macros::Display;

/// Risk classification attached by the tracking backend. Optional on the
/// wire; absence means the backend has not classified the object.
#[derive(serde::Deserialize, serde::Serialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskClass {
    Nominal,
    Low,
    Medium,
    High,
}

/// One tracked object as received from the positions endpoint.
///
/// Records are immutable once received and replaced wholesale on each
/// successful poll; there is no identity tracking across snapshots.
/// Numeric fields are taken as the backend sends them.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct SatelliteRecord {
    name: String,
    norad_id: u32,
    /// Geodetic latitude in degrees.
    lat: f64,
    /// Geodetic longitude in degrees.
    lon: f64,
    /// Altitude above the surface in kilometers.
    alt: f64,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    z: Option<f64>,
    #[serde(default)]
    risk: Option<RiskClass>,
    /// Display-only epoch string, passed through untouched.
    #[serde(default)]
    epoch: Option<String>,
}

impl SatelliteRecord {
    pub fn name(&self) -> &str { &self.name }
    pub fn norad_id(&self) -> u32 { self.norad_id }
    pub fn lat(&self) -> f64 { self.lat }
    pub fn lon(&self) -> f64 { self.lon }
    pub fn alt(&self) -> f64 { self.alt }
    pub fn x(&self) -> Option<f64> { self.x }
    pub fn y(&self) -> Option<f64> { self.y }
    pub fn z(&self) -> Option<f64> { self.z }
    pub fn risk(&self) -> Option<RiskClass> { self.risk }
    pub fn epoch(&self) -> Option<&str> { self.epoch.as_deref() }
}

#[cfg(test)]
mod tests {
    use super::{RiskClass, SatelliteRecord};

    #[test]
    fn optional_fields_default_to_absent() {
        let record: SatelliteRecord = serde_json::from_str(
            r#"{"name":"ISS","norad_id":25544,"lat":10.0,"lon":20.0,"alt":400.0}"#,
        )
        .unwrap();
        assert_eq!(record.x(), None);
        assert_eq!(record.risk(), None);
        assert_eq!(record.epoch(), None);
    }

    #[test]
    fn full_record_round_trips_fields() {
        let record: SatelliteRecord = serde_json::from_str(
            r#"{"name":"COSMOS 1408 DEB","norad_id":49863,"lat":-51.2,"lon":143.9,
                "alt":465.1,"x":-3187.4,"y":2401.9,"z":-5170.8,"risk":"high",
                "epoch":"2026-08-06T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.norad_id(), 49863);
        assert_eq!(record.risk(), Some(RiskClass::High));
        assert_eq!(record.z(), Some(-5170.8));
        assert_eq!(record.epoch(), Some("2026-08-06T12:00:00Z"));
    }

    #[test]
    fn risk_class_displays_lowercase() {
        assert_eq!(RiskClass::Nominal.to_string(), "nominal");
        assert_eq!(RiskClass::High.to_string(), "high");
    }
}
