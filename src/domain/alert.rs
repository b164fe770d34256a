use serde::{Deserialize, Serialize};

/// Label used when a feed item has no usable title ("alert" in Arabic)
pub const DEFAULT_TITLE: &str = "تنبيه";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    /// Raw `pubDate` string as it appears in the feed
    pub published: String,
    pub summary: String,
}

impl Alert {
    /// Trims the title and falls back to [`DEFAULT_TITLE`] if nothing is left.
    pub fn new(title: Option<&str>) -> Self {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE);

        Self {
            title: title.to_string(),
            published: String::new(),
            summary: String::new(),
        }
    }

    pub fn with_published(mut self, published: Option<&str>) -> Self {
        self.published = published.map(str::trim).unwrap_or_default().to_string();
        self
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = summary;
        self
    }
}
