use clap::Parser;

use cap_alerts::cli::Cli;
use cap_alerts::config::Config;
use cap_alerts::errors::AlertsResult;
use cap_alerts::logging::init_logging;
use cap_alerts::services::AlertService;
use cap_alerts::sources::HttpFetcher;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AlertsResult<()> {
    // .env must be loaded before clap reads the environment
    Config::load_env();
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let fetcher = HttpFetcher::from_config(&config)?;
    let service = AlertService::new(fetcher, config);

    let summary = service.run()?;
    tracing::debug!(alerts = summary.alert_count, "run complete");

    println!("Wrote {}", summary.path.display());

    Ok(())
}
