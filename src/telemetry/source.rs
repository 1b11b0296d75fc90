use super::record::SatelliteRecord;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::positions_get::PositionsRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::http_handler::TelemetryError;
use async_trait::async_trait;
use std::sync::Arc;

/// The seam between the polling controller and whatever produces position
/// snapshots. One call is one timed attempt; no shared state is touched.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn fetch_positions(&self) -> Result<Vec<SatelliteRecord>, TelemetryError>;
}

/// Production source: the authenticated `GET /positions` request.
pub struct HTTPPositionSource {
    client: Arc<HTTPClient>,
}

impl HTTPPositionSource {
    pub fn new(client: Arc<HTTPClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PositionSource for HTTPPositionSource {
    async fn fetch_positions(&self) -> Result<Vec<SatelliteRecord>, TelemetryError> {
        let response = PositionsRequest {}.send_request(&self.client).await?;
        Ok(response.into_satellites())
    }
}
