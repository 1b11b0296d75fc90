use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::telemetry::record::SatelliteRecord;

/// Success body of `GET /positions`: the current constellation snapshot.
/// A body without the `satellites` list is rejected at parse time.
#[derive(serde::Deserialize, Debug)]
pub struct PositionsResponse {
    satellites: Vec<SatelliteRecord>,
}

impl SerdeJSONBodyHTTPResponseType for PositionsResponse {}

impl PositionsResponse {
    pub fn satellites(&self) -> &[SatelliteRecord] { &self.satellites }
    pub fn into_satellites(self) -> Vec<SatelliteRecord> { self.satellites }
}
