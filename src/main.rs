#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod dashboard;
mod http_handler;
mod keychain;
mod logger;
mod telemetry;

use crate::config::Config;
use crate::dashboard::globe::ConsoleGlobe;
use crate::dashboard::view::Dashboard;
use crate::keychain::Keychain;
use std::sync::Arc;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => fatal!("{err}"),
    };
    info!("satwatch starting against {}", config.base_url());

    let keychain = Keychain::new(&config);
    let poller = keychain.poller();
    let cancel = poller.cancellation_token();
    let poll_task = tokio::spawn({
        let poller = Arc::clone(&poller);
        async move { poller.run().await }
    });

    let mut dashboard = Dashboard::new(
        keychain.state_rx(),
        poller.refresh_handle(),
        cancel.clone(),
        Box::new(ConsoleGlobe::default()),
    );
    dashboard.run(tokio::io::stdin()).await;

    cancel.cancel();
    let _ = poll_task.await;
    info!("satwatch shut down");
}
