use std::path::PathBuf;
use std::time::Duration;

use hiscores_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    /// `None` uses the taxonomy embedded in the binary.
    pub taxonomy_path: Option<PathBuf>,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("HISCORES_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout_secs = std::env::var("HISCORES_TIMEOUT_SECS")
            .ok()
            .and_then(|v| parse_timeout_secs(&v))
            .unwrap_or(DEFAULT_TIMEOUT.as_secs());
        let taxonomy_path = std::env::var("HISCORES_TAXONOMY_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let log_format = std::env::var("HISCORES_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            taxonomy_path,
            log_format,
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        taxonomy_path: Option<PathBuf>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        match timeout_secs {
            Some(0) => tracing::warn!("Ignoring zero timeout, keeping {}s", self.timeout.as_secs()),
            Some(secs) => self.timeout = Duration::from_secs(secs),
            None => {}
        }
        if taxonomy_path.is_some() {
            self.taxonomy_path = taxonomy_path;
        }
        self
    }
}

/// Whole seconds, ignoring values that are unparseable or zero.
fn parse_timeout_secs(value: &str) -> Option<u64> {
    value.trim().parse().ok().filter(|secs| *secs > 0)
}
