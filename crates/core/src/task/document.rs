//! Server-side backing document
//!
//! The whole task list is persisted as a single pretty-printed JSON file.
//! The document is deliberately untyped: replace-list writes whatever JSON
//! value the caller sent, verbatim.

use std::path::PathBuf;

use serde_json::Value;

use crate::{Error, Result};

/// Whole-list JSON document on disk
pub struct ListDocument {
    path: PathBuf,
}

impl ListDocument {
    /// Create a handle to the document at `path`
    ///
    /// Nothing is touched on disk until the first retrieve or replace.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the full document
    ///
    /// A missing file reads as an empty array. The containing directory is
    /// created if absent, so the first replace cannot fail on a missing
    /// parent. Any other I/O or parse failure is a read error.
    pub async fn retrieve(&self) -> Result<Value> {
        self.ensure_parent_dir().await.map_err(Error::read)?;

        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Value::Array(Vec::new()));
            }
            Err(err) => return Err(Error::read(err)),
        };

        serde_json::from_str(&content).map_err(Error::read)
    }

    /// Overwrite the full document with `value`, pretty-printed
    ///
    /// No atomic rename and no lock: concurrent replaces race and the last
    /// write wins.
    pub async fn replace(&self, value: &Value) -> Result<()> {
        self.ensure_parent_dir().await.map_err(Error::write)?;

        let content = serde_json::to_string_pretty(value).map_err(Error::write)?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(Error::write)?;

        tracing::debug!(path = %self.path.display(), "replaced task list document");
        Ok(())
    }

    async fn ensure_parent_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}
