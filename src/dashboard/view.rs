use super::globe::GlobeRenderer;
use super::panel::{Selection, render_panel};
use super::point::PointFeature;
use crate::telemetry::record::SatelliteRecord;
use crate::telemetry::sync_state::SyncState;
use crate::{error, info, log, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::{Notify, watch};
use tokio_util::sync::CancellationToken;

/// Operator commands accepted on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(String),
    Close,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parses one input line; blank lines are ignored.
    pub fn parse(line: &str) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let (verb, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(v, r)| (v, r.trim()));
        match verb.to_ascii_lowercase().as_str() {
            "select" if !rest.is_empty() => Some(Command::Select(rest.to_string())),
            "close" => Some(Command::Close),
            "refresh" => Some(Command::Refresh),
            "help" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => Some(Command::Unknown(trimmed.to_string())),
        }
    }
}

/// Finds the record a `select` query refers to: exact name match first,
/// then the first substring match, both case-insensitive.
fn lookup_satellite(satellites: &[SatelliteRecord], query: &str) -> Option<SatelliteRecord> {
    let lowered = query.to_lowercase();
    satellites
        .iter()
        .find(|s| s.name().eq_ignore_ascii_case(query))
        .or_else(|| satellites.iter().find(|s| s.name().to_lowercase().contains(&lowered)))
        .cloned()
}

/// Read-only observer of the published state plus the operator surface.
///
/// Subscribes to the watch channel, pushes point features over the globe
/// boundary on every connected snapshot, keeps the warning footer alive
/// during outages, and maps console commands onto selection changes,
/// manual refreshes and shutdown.
pub struct Dashboard {
    state_rx: watch::Receiver<SyncState>,
    refresh: Arc<Notify>,
    cancel: CancellationToken,
    globe: Box<dyn GlobeRenderer>,
    selection: Selection,
}

impl Dashboard {
    pub fn new(
        state_rx: watch::Receiver<SyncState>,
        refresh: Arc<Notify>,
        cancel: CancellationToken,
        globe: Box<dyn GlobeRenderer>,
    ) -> Self {
        Self {
            state_rx,
            refresh,
            cancel,
            globe,
            selection: Selection::default(),
        }
    }

    pub fn selection(&self) -> &Selection { &self.selection }

    /// Runs until `quit`, external cancellation, or the publisher going
    /// away. Input reaching end-of-stream stops the command surface but
    /// keeps the state rendering alive.
    pub async fn run<R>(&mut self, input: R)
    where
        R: AsyncRead + Unpin,
    {
        let mut lines = BufReader::new(input).lines();
        let mut input_open = true;
        loop {
            tokio::select! {
                () = self.cancel.cancelled() => break,
                changed = self.state_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.render_update();
                }
                line = lines.next_line(), if input_open => match line {
                    Ok(Some(text)) => {
                        if !self.handle_command(&text) {
                            self.cancel.cancel();
                            break;
                        }
                    }
                    Ok(None) => input_open = false,
                    Err(err) => {
                        error!("console input failed: {err}");
                        input_open = false;
                    }
                },
            }
        }
    }

    fn render_update(&mut self) {
        let state = self.state_rx.borrow_and_update().clone();
        if state.is_connected() {
            let points: Vec<PointFeature> =
                state.satellites().iter().map(PointFeature::from_record).collect();
            self.globe.update_points(&points);
            let synced = state
                .last_updated()
                .map_or_else(|| String::from("never"), |t| t.format("%H:%M:%S").to_string());
            info!("uplink ok | {} satellites | synced {}", state.satellites().len(), synced);
        } else if let Some(err) = state.error() {
            // Stale-but-shown: the last good snapshot stays on screen with a
            // persistent warning.
            warn!("{err} | showing last snapshot ({} satellites)", state.satellites().len());
        }
    }

    /// Returns false when the operator asked to quit.
    fn handle_command(&mut self, line: &str) -> bool {
        let Some(command) = Command::parse(line) else {
            return true;
        };
        match command {
            Command::Select(query) => {
                let found = lookup_satellite(self.state_rx.borrow().satellites(), &query);
                match found {
                    Some(record) => {
                        println!("{}", render_panel(&record));
                        self.selection.set(record);
                    }
                    None => warn!("no tracked satellite matches '{query}'"),
                }
            }
            Command::Close => {
                self.selection.clear();
                log!("selection cleared");
            }
            Command::Refresh => {
                self.refresh.notify_one();
                log!("manual refresh requested");
            }
            Command::Help => {
                println!("commands: select <name> | close | refresh | quit");
            }
            Command::Quit => {
                log!("shutting down");
                return false;
            }
            Command::Unknown(text) => warn!("unknown command '{text}', try 'help'"),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Dashboard, lookup_satellite};
    use crate::dashboard::globe::ConsoleGlobe;
    use crate::telemetry::record::SatelliteRecord;
    use crate::telemetry::sync_state::SyncState;
    use chrono::Utc;
    use std::sync::Arc;
    use tokio::sync::{Notify, watch};
    use tokio_util::sync::CancellationToken;

    fn snapshot() -> Vec<SatelliteRecord> {
        serde_json::from_str(
            r#"[{"name":"ISS (ZARYA)","norad_id":25544,"lat":10.0,"lon":20.0,"alt":417.5},
                {"name":"STARLINK-3042","norad_id":50803,"lat":51.0,"lon":-0.4,"alt":548.2}]"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("select iss"), Some(Command::Select("iss".into())));
        assert_eq!(Command::parse("  SELECT Starlink-3042 "), Some(Command::Select("Starlink-3042".into())));
        assert_eq!(Command::parse("close"), Some(Command::Close));
        assert_eq!(Command::parse("refresh"), Some(Command::Refresh));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("select"), Some(Command::Unknown("select".into())));
        assert_eq!(Command::parse("bogus"), Some(Command::Unknown("bogus".into())));
    }

    #[test]
    fn lookup_prefers_exact_match_then_substring() {
        let sats = snapshot();
        assert_eq!(lookup_satellite(&sats, "iss (zarya)").unwrap().norad_id(), 25544);
        assert_eq!(lookup_satellite(&sats, "starlink").unwrap().norad_id(), 50803);
        assert!(lookup_satellite(&sats, "hubble").is_none());
    }

    #[tokio::test]
    async fn select_command_sets_selection_until_quit() {
        let (state_tx, state_rx) = watch::channel(SyncState::default());
        state_tx.send_modify(|s| s.apply_success(snapshot(), Utc::now()));
        let cancel = CancellationToken::new();
        let mut dashboard = Dashboard::new(
            state_rx,
            Arc::new(Notify::new()),
            cancel.clone(),
            Box::new(ConsoleGlobe::default()),
        );

        dashboard.run(&b"select iss\nquit\n"[..]).await;

        assert!(cancel.is_cancelled());
        assert_eq!(dashboard.selection().current().unwrap().norad_id(), 25544);
    }

    #[tokio::test]
    async fn close_command_clears_selection() {
        let (state_tx, state_rx) = watch::channel(SyncState::default());
        state_tx.send_modify(|s| s.apply_success(snapshot(), Utc::now()));
        let cancel = CancellationToken::new();
        let mut dashboard = Dashboard::new(
            state_rx,
            Arc::new(Notify::new()),
            cancel.clone(),
            Box::new(ConsoleGlobe::default()),
        );

        dashboard.run(&b"select starlink\nclose\nquit\n"[..]).await;

        assert!(dashboard.selection().current().is_none());
    }

    #[tokio::test]
    async fn refresh_command_notifies_poller_handle() {
        let (state_tx, state_rx) = watch::channel(SyncState::default());
        state_tx.send_modify(|s| s.apply_success(snapshot(), Utc::now()));
        let refresh = Arc::new(Notify::new());
        let cancel = CancellationToken::new();
        let mut dashboard = Dashboard::new(
            state_rx,
            Arc::clone(&refresh),
            cancel.clone(),
            Box::new(ConsoleGlobe::default()),
        );

        dashboard.run(&b"refresh\nquit\n"[..]).await;

        // The permit left behind by notify_one is immediately consumable.
        let pending = tokio::time::timeout(std::time::Duration::from_millis(50), refresh.notified());
        assert!(pending.await.is_ok());
    }
}
