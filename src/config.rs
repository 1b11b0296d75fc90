use crate::http_handler::TelemetryError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.cryptik.tech";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Environment-provided configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
    base_url: String,
    poll_interval: Duration,
}

impl Config {
    /// Reads the process environment. A missing or empty `SATWATCH_API_KEY`
    /// is a usage error resolved here, before any network call is attempted.
    pub fn from_env() -> Result<Config, TelemetryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, TelemetryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("SATWATCH_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(TelemetryError::MissingCredential)?;
        let base_url =
            lookup("SATWATCH_BASE_URL").unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        let poll_interval = lookup("SATWATCH_POLL_SECS")
            .and_then(|raw| raw.parse::<u64>().ok())
            .map_or(DEFAULT_POLL_INTERVAL, Duration::from_secs);
        Ok(Config { api_key, base_url, poll_interval })
    }

    pub fn api_key(&self) -> &str { &self.api_key }
    pub fn base_url(&self) -> &str { &self.base_url }
    pub fn poll_interval(&self) -> Duration { self.poll_interval }
}
