use std::{env, time::Duration};
use url::Url;

// Runtime settings, all read from the environment with local defaults.

pub fn server_url() -> String {
    env::var("LOBBY_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:8081".to_string())
}

pub fn request_timeout() -> Duration {
    let millis = env::var("LOBBY_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}

pub fn player_name() -> String {
    env::var("LOBBY_PLAYER_NAME").unwrap_or_else(|_| "Probe".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientSettings {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            timeout,
        })
    }

    pub fn from_env() -> Result<Self, url::ParseError> {
        Self::new(&server_url(), request_timeout())
    }
}
