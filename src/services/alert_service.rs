use std::path::PathBuf;

use crate::config::Config;
use crate::domain::AlertDocument;
use crate::errors::AlertsResult;
use crate::parsing::extract_alerts;
use crate::services::writer::DocumentWriter;
use crate::sources::FeedFetcher;

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub path: PathBuf,
    pub alert_count: usize,
}

pub struct AlertService<F: FeedFetcher> {
    fetcher: F,
    config: Config,
}

impl<F: FeedFetcher> AlertService<F> {
    pub fn new(fetcher: F, config: Config) -> Self {
        Self { fetcher, config }
    }

    /// Fetch and parse the feed into a document.
    /// Nothing is written here and `generated_utc` is left for the writer.
    pub fn collect(&self) -> AlertsResult<AlertDocument> {
        let xml = self.fetcher.fetch_text(&self.config.feed_url)?;
        let alerts = extract_alerts(&xml, self.config.limit)?;

        Ok(AlertDocument::new(
            &self.config.source_label,
            &self.config.feed_url,
            alerts,
        ))
    }

    /// Collect the latest alerts and overwrite the output file
    pub fn run(&self) -> AlertsResult<RunSummary> {
        let document = self.collect()?;

        let writer = DocumentWriter::new(&self.config.output_path);
        let written = writer.write(document)?;

        Ok(RunSummary {
            path: writer.path().to_path_buf(),
            alert_count: written.alerts.len(),
        })
    }
}
