use super::source::PositionSource;
use super::sync_state::SyncState;
use crate::{event, warn};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Owns the recurring fetch schedule and is the single writer of
/// [`SyncState`].
///
/// One attempt fires immediately on activation, then one per period and one
/// per manual refresh notification. Every resolution is folded into the
/// state and republished over the watch channel; observers hold read-only
/// receivers. Cancelling the token stops the schedule deterministically;
/// in-flight attempts are not aborted, their late results are detected and
/// discarded instead of reaching a defunct subscriber.
pub struct PollingController {
    source: Arc<dyn PositionSource>,
    state_tx: watch::Sender<SyncState>,
    refresh: Arc<Notify>,
    cancel: CancellationToken,
    period: Duration,
}

impl PollingController {
    pub fn new(
        source: Arc<dyn PositionSource>,
        period: Duration,
    ) -> (PollingController, watch::Receiver<SyncState>) {
        let (state_tx, state_rx) = watch::channel(SyncState::default());
        (
            Self {
                source,
                state_tx,
                refresh: Arc::new(Notify::new()),
                cancel: CancellationToken::new(),
                period,
            },
            state_rx,
        )
    }

    /// Handle for requesting an immediate out-of-schedule attempt.
    pub fn refresh_handle(&self) -> Arc<Notify> { Arc::clone(&self.refresh) }

    /// Token that tears the schedule down; results resolving after it fires
    /// are dropped unpublished.
    pub fn cancellation_token(&self) -> CancellationToken { self.cancel.clone() }

    /// A fresh read-only view of the published state.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> { self.state_tx.subscribe() }

    /// Runs the schedule until the token is cancelled.
    ///
    /// Attempts are fired without an overlap guard: when one outlasts the
    /// period, the next runs concurrently and the last resolution wins on
    /// the channel.
    pub async fn run(&self) {
        let mut tick = tokio::time::interval(self.period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                () = self.cancel.cancelled() => break,
                _ = tick.tick() => {}
                () = self.refresh.notified() => {}
            }
            self.spawn_attempt();
        }
        event!("polling schedule stopped");
    }

    fn spawn_attempt(&self) {
        let source = Arc::clone(&self.source);
        let state_tx = self.state_tx.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            let outcome = source.fetch_positions().await;
            if cancel.is_cancelled() {
                event!("discarding attempt that resolved after shutdown");
                return;
            }
            match outcome {
                Ok(satellites) => {
                    event!("snapshot received: {} satellites", satellites.len());
                    state_tx.send_modify(|state| state.apply_success(satellites, Utc::now()));
                }
                Err(err) => {
                    warn!("positions fetch failed: {err}");
                    state_tx.send_modify(|state| state.apply_failure(err));
                }
            }
        });
    }
}
