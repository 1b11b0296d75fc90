use super::super::common::TelemetryError;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, TelemetryError>
    where
        Self::ParsedResponseType: for<'de> serde::Deserialize<'de>,
    {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, TelemetryError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, TelemetryError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, TelemetryError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(status_error(response.status()))
        }
    }
}

/// Maps a non-success status code onto the failure taxonomy. Status checks
/// take precedence over body parsing, so a 429 with a garbage body is still
/// a rate-limit error.
pub(crate) fn status_error(status: reqwest::StatusCode) -> TelemetryError {
    match status {
        reqwest::StatusCode::TOO_MANY_REQUESTS => TelemetryError::RateLimited,
        reqwest::StatusCode::UNAUTHORIZED => TelemetryError::Unauthorized,
        other => TelemetryError::Server(other.as_u16()),
    }
}
