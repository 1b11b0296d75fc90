use super::record::SatelliteRecord;
use crate::http_handler::TelemetryError;
use chrono::{DateTime, Utc};

/// The process-wide constellation snapshot published after every poll
/// attempt.
///
/// Holds the most recent successful satellite list (previous snapshots are
/// discarded), the outcome of the latest attempt, and the timestamp of the
/// last successful sync. There is exactly one writer; observers receive
/// value snapshots through a watch channel.
///
/// Invariants: `connected` is true iff the most recent attempt succeeded,
/// `error` is present only while disconnected, and `loading` is true only
/// until the first attempt resolves either way.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncState {
    satellites: Vec<SatelliteRecord>,
    loading: bool,
    error: Option<TelemetryError>,
    last_updated: Option<DateTime<Utc>>,
    connected: bool,
}

impl Default for SyncState {
    fn default() -> Self {
        Self {
            satellites: Vec::new(),
            loading: true,
            error: None,
            last_updated: None,
            connected: false,
        }
    }
}

impl SyncState {
    pub fn satellites(&self) -> &[SatelliteRecord] { &self.satellites }
    pub fn is_loading(&self) -> bool { self.loading }
    pub fn error(&self) -> Option<&TelemetryError> { self.error.as_ref() }
    pub fn last_updated(&self) -> Option<DateTime<Utc>> { self.last_updated }
    pub fn is_connected(&self) -> bool { self.connected }

    /// Folds a successful attempt into the state: the list is replaced
    /// wholesale, never merged.
    pub(crate) fn apply_success(
        &mut self,
        satellites: Vec<SatelliteRecord>,
        timestamp: DateTime<Utc>,
    ) {
        self.satellites = satellites;
        self.connected = true;
        self.error = None;
        self.last_updated = Some(timestamp);
        self.loading = false;
    }

    /// Folds a failed attempt into the state. The previous list stays
    /// untouched so observers keep the last good snapshot during outages.
    pub(crate) fn apply_failure(&mut self, error: TelemetryError) {
        self.connected = false;
        self.error = Some(error);
        self.loading = false;
    }
}
