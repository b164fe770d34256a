use clap::Parser;

use crate::config::{DEFAULT_FEED_URL, DEFAULT_LIMIT, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "cap-alerts")]
#[command(about = "Fetch the latest Libyan CAP weather alerts and write them as JSON")]
#[command(version)]
pub struct Cli {
    /// CAP RSS feed to read alerts from
    #[arg(long, env = "CAP_ALERTS_FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Output file (overwritten on every run)
    #[arg(short, long, env = "CAP_ALERTS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Maximum number of feed items to keep
    #[arg(long, env = "CAP_ALERTS_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// HTTP timeout in seconds
    #[arg(long, env = "CAP_ALERTS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Serialises tests that touch the process environment
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Parse `args` with every `CAP_ALERTS_*` override removed from the environment
#[cfg(test)]
pub(crate) fn parse_without_env(args: &[&str]) -> Result<Cli, clap::Error> {
    let _guard = env_lock();
    for var in [
        "CAP_ALERTS_FEED_URL",
        "CAP_ALERTS_OUTPUT",
        "CAP_ALERTS_LIMIT",
        "CAP_ALERTS_TIMEOUT_SECS",
    ] {
        std::env::remove_var(var);
    }

    Cli::try_parse_from(args)
}
