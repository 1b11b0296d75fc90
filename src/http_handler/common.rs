use strum_macros::Display;

/// Failure taxonomy for one telemetry fetch attempt.
///
/// Every network or configuration failure the tracker can encounter is mapped
/// into one of these variants at the HTTP boundary; the display strings are
/// the operator-facing messages shown in the status footer.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TelemetryError {
    /// No API key was provided, decided before any network call is made.
    #[strum(to_string = "API key not configured. Please set SATWATCH_API_KEY in your environment.")]
    MissingCredential,
    /// The server answered HTTP 429.
    #[strum(to_string = "Rate limit exceeded. Please wait before refreshing.")]
    RateLimited,
    /// The server rejected the credential with HTTP 401.
    #[strum(to_string = "Invalid API key. Please check your configuration.")]
    Unauthorized,
    /// Any other non-success status, carrying the status code.
    #[strum(to_string = "API error: {0}")]
    Server(u16),
    /// The request was sent but no response arrived (timeout or transport failure).
    #[strum(to_string = "Unable to reach API server. Please check your connection.")]
    NoConnection,
    /// A response arrived but did not carry the expected satellite list.
    #[strum(to_string = "Invalid API response format")]
    Malformed,
}

impl std::error::Error for TelemetryError {}

impl From<reqwest::Error> for TelemetryError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            TelemetryError::Malformed
        } else {
            // Timeouts, connect failures and everything else where no usable
            // response was received.
            TelemetryError::NoConnection
        }
    }
}
