use super::super::common::TelemetryError;
use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::HTTPResponseType;

#[derive(Debug, Copy, Clone)]
pub(crate) enum HTTPRequestMethod {
    Get,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
        }
    }
}

pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;

    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Sends the request against the client's base URL and parses the typed
    /// response. The credential travels as `X-API-Key` on every call.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, TelemetryError> {
        let response = client
            .client()
            .request(
                self.request_method().into(),
                format!("{}{}", client.url(), self.endpoint()),
            )
            .header("X-API-Key", client.api_key())
            .headers(self.header_params())
            .send()
            .await?;
        Self::Response::read_response(response).await
    }
}
