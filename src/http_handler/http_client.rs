/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL, credential and default settings.
///
/// This client is used for making REST API calls to the tracking backend.
/// It sets a fixed timeout and allows easy reuse of the HTTP client
/// infrastructure.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Credential sent as `X-API-Key` on every request.
    api_key: String,
}

impl HTTPClient {
    /// Fixed bound on each request; attempts exceeding it count as no response.
    const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

    /// Constructs a new `HTTPClient` with the given base URL and credential.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"https://api.cryptik.tech"`).
    /// * `api_key` – The credential attached to every request.
    ///
    /// # Returns
    /// A configured `HTTPClient` instance.
    pub fn new(base_url: &str, api_key: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(Self::REQUEST_TIMEOUT)
                .build()
                .unwrap(),
            base_url: String::from(base_url),
            api_key: String::from(api_key),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }
    /// Returns the credential attached to outgoing requests.
    pub(super) fn api_key(&self) -> &str { self.api_key.as_str() }
}
