use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::Alert;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub source: String,
    pub feed: String,
    pub generated_utc: String,
}

/// The JSON document written on every run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDocument {
    pub meta: DocumentMeta,
    pub alerts: Vec<Alert>,
}

impl AlertDocument {
    /// `generated_utc` stays empty until the document is stamped for writing.
    pub fn new(source: &str, feed: &str, alerts: Vec<Alert>) -> Self {
        Self {
            meta: DocumentMeta {
                source: source.to_string(),
                feed: feed.to_string(),
                generated_utc: String::new(),
            },
            alerts,
        }
    }

    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.meta.generated_utc = format_timestamp(at);
        self
    }

    /// Pretty JSON with two-space indentation; non-ASCII stays literal.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// ISO-8601 with microseconds and an explicit `+00:00` offset
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
