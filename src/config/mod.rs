use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::cli::Cli;
use crate::errors::{AlertsError, AlertsResult};

/// Official WMO register CAP RSS feed (Arabic) of the Libyan NMC
pub const DEFAULT_FEED_URL: &str = "https://cap-sources.s3.amazonaws.com/ly-nmc-ar/rss.xml";
pub const DEFAULT_OUTPUT: &str = "alerts.json";
pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const SOURCE_LABEL: &str = "WMO CAP (Libyan National Meteorological Centre)";
pub const USER_AGENT: &str = "darna-weather (CAP alerts fetcher)";

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub output_path: PathBuf,
    pub limit: usize,
    pub timeout: Duration,
    pub user_agent: String,
    pub source_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            limit: DEFAULT_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            source_label: SOURCE_LABEL.to_string(),
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Load `.env` files so clap can pick overrides up from the environment.
    /// Must run before `Cli::parse`.
    pub fn load_env() {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();
    }

    pub fn from_cli(cli: &Cli) -> AlertsResult<Self> {
        let config = Self {
            feed_url: cli.feed_url.clone(),
            output_path: PathBuf::from(&cli.output),
            limit: cli.limit,
            timeout: Duration::from_secs(cli.timeout_secs),
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AlertsResult<()> {
        let parsed =
            Url::parse(&self.feed_url).map_err(|e| AlertsError::InvalidUrl(e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AlertsError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                parsed.scheme(),
                self.feed_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(AlertsError::Config(
                "timeout must be at least one second".to_string(),
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(AlertsError::Config("output path is empty".to_string()));
        }

        Ok(())
    }
}
