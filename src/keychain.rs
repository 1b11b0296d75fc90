use crate::config::Config;
use crate::http_handler::http_client::HTTPClient;
use crate::telemetry::poller::PollingController;
use crate::telemetry::source::HTTPPositionSource;
use crate::telemetry::sync_state::SyncState;
use std::sync::Arc;
use tokio::sync::watch;

/// Struct representing the key components of the application, providing
/// access to the HTTP client, the polling controller and the published
/// state.
pub struct Keychain {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// The polling controller owning the fetch schedule.
    poller: Arc<PollingController>,
    /// Read-only view of the published constellation state.
    state_rx: watch::Receiver<SyncState>,
}

impl Keychain {
    /// Wires the subsystems together from the resolved configuration.
    pub fn new(config: &Config) -> Self {
        let client = Arc::new(HTTPClient::new(config.base_url(), config.api_key()));
        let source = Arc::new(HTTPPositionSource::new(Arc::clone(&client)));
        let (poller, state_rx) = PollingController::new(source, config.poll_interval());
        Self {
            client,
            poller: Arc::new(poller),
            state_rx,
        }
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the polling controller.
    pub fn poller(&self) -> Arc<PollingController> { Arc::clone(&self.poller) }

    /// Provides a fresh read-only state receiver.
    pub fn state_rx(&self) -> watch::Receiver<SyncState> { self.state_rx.clone() }
}
