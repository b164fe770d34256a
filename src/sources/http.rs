use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::Config;
use crate::errors::AlertsResult;
use crate::sources::traits::FeedFetcher;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> AlertsResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> AlertsResult<Self> {
        Self::new(config.timeout, &config.user_agent)
    }

    /// Invalid UTF-8 sequences are replaced, never rejected.
    fn decode(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

impl FeedFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> AlertsResult<String> {
        tracing::info!(url, "fetching feed");

        let response = self.client.get(url).send()?.error_for_status()?;
        let status = response.status();
        let bytes = response.bytes()?;

        tracing::info!(%status, bytes = bytes.len(), "feed fetched");

        Ok(Self::decode(&bytes))
    }
}
