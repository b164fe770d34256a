use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr fmt subscriber. `RUST_LOG` overrides the default filter.
///
/// Stdout is left alone so it only carries the completion line.
pub fn init_logging() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
