use crate::telemetry::record::{RiskClass, SatelliteRecord};
use std::fmt::Write;

/// The record currently inspected in the info panel.
///
/// Held by value: a selected record keeps displaying its captured fields
/// even after the constellation snapshot is replaced underneath it.
#[derive(Debug, Default)]
pub struct Selection {
    current: Option<SatelliteRecord>,
}

impl Selection {
    pub fn set(&mut self, record: SatelliteRecord) { self.current = Some(record); }
    pub fn clear(&mut self) { self.current = None; }
    pub fn current(&self) -> Option<&SatelliteRecord> { self.current.as_ref() }
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

fn risk_style(risk: Option<RiskClass>) -> &'static str {
    match risk {
        Some(RiskClass::Nominal | RiskClass::Low) => GREEN,
        Some(RiskClass::Medium) => AMBER,
        Some(RiskClass::High) => RED,
        None => CYAN,
    }
}

fn fmt_opt_km(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("---"), |v| format!("{v:.2}"))
}

/// Renders the inspected record as a panel block for the console.
pub fn render_panel(record: &SatelliteRecord) -> String {
    let risk_text =
        record.risk().map_or_else(|| String::from("UNKNOWN"), |r| r.to_string().to_uppercase());
    let style = risk_style(record.risk());

    let mut out = String::new();
    let _ = writeln!(out, "{CYAN}== TARGET LOCKED ============================{RESET}");
    let _ = writeln!(out, "  DESIGNATION:  {}", record.name());
    let _ = writeln!(out, "  NORAD ID:     #{}", record.norad_id());
    let _ = writeln!(out, "  THREAT LEVEL: {style}{risk_text}{RESET}");
    let _ = writeln!(out, "  LATITUDE:     {:.4} deg", record.lat());
    let _ = writeln!(out, "  LONGITUDE:    {:.4} deg", record.lon());
    let _ = writeln!(out, "  ALTITUDE:     {:.2} km", record.alt());
    let _ = writeln!(out, "  ECEF X:       {} km", fmt_opt_km(record.x()));
    let _ = writeln!(out, "  ECEF Y:       {} km", fmt_opt_km(record.y()));
    let _ = writeln!(out, "  ECEF Z:       {} km", fmt_opt_km(record.z()));
    let _ = writeln!(out, "  EPOCH:        {}", record.epoch().unwrap_or("---"));
    let _ = write!(out, "{CYAN}============================================={RESET}");
    out
}

#[cfg(test)]
mod tests {
    use super::{Selection, render_panel};
    use crate::telemetry::record::SatelliteRecord;

    fn iss() -> SatelliteRecord {
        serde_json::from_str(
            r#"{"name":"ISS (ZARYA)","norad_id":25544,"lat":10.1234,"lon":20.5678,
                "alt":417.53,"risk":"nominal","epoch":"2026-08-06T12:00:00Z"}"#,
        )
        .unwrap()
    }

    #[test]
    fn panel_shows_identity_and_telemetry() {
        let rendered = render_panel(&iss());
        assert!(rendered.contains("ISS (ZARYA)"));
        assert!(rendered.contains("#25544"));
        assert!(rendered.contains("10.1234 deg"));
        assert!(rendered.contains("417.53 km"));
        assert!(rendered.contains("NOMINAL"));
        assert!(rendered.contains("2026-08-06T12:00:00Z"));
    }

    #[test]
    fn absent_cartesian_fields_render_placeholders() {
        let sparse: SatelliteRecord = serde_json::from_str(
            r#"{"name":"UNKNOWN OBJ","norad_id":99999,"lat":0.0,"lon":0.0,"alt":800.0}"#,
        )
        .unwrap();
        let rendered = render_panel(&sparse);
        assert!(rendered.contains("ECEF X:       --- km"));
        assert!(rendered.contains("EPOCH:        ---"));
        assert!(rendered.contains("UNKNOWN"));
    }

    #[test]
    fn selection_set_and_clear() {
        let mut selection = Selection::default();
        assert!(selection.current().is_none());
        selection.set(iss());
        assert_eq!(selection.current().unwrap().norad_id(), 25544);
        selection.clear();
        assert!(selection.current().is_none());
    }
}
