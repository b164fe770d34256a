use crate::errors::AlertsResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher {
    /// Fetch the feed at `url` and return its body as text
    fn fetch_text(&self, url: &str) -> AlertsResult<String>;
}
