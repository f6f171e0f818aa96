use std::time::Duration;

/// Public hiscores host.
pub const DEFAULT_BASE_URL: &str = "https://secure.runescape.com";

/// Per-request timeout. There is no retry after it elapses.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = concat!("hiscores/", env!("CARGO_PKG_VERSION"));

/// Settings for [`HiscoresClient`](super::HiscoresClient).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Scheme and host the endpoint paths are appended to.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
