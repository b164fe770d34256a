use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::AlertDocument;
use crate::errors::AlertsResult;

pub struct DocumentWriter {
    path: PathBuf,
}

impl DocumentWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stamp `generated_utc`, serialize, then replace the file contents in one write.
    /// Returns the document exactly as written.
    pub fn write(&self, document: AlertDocument) -> AlertsResult<AlertDocument> {
        let document = document.with_generated_at(Utc::now());
        let json = document.to_json()?;
        fs::write(&self.path, json)?;

        tracing::info!(path = %self.path.display(), alerts = document.alerts.len(), "document written");
        Ok(document)
    }
}
