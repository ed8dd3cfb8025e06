//! File-based task store
//!
//! The client-local fallback cache: a typed counterpart of the server's
//! backing document, read when the server cannot be reached at load time
//! and written when a save fails.

use std::path::PathBuf;

use async_trait::async_trait;

use super::model::Task;
use super::store::TaskStore;
use crate::{Error, Result};

/// Task list cached in a local JSON file
pub struct FileTaskStore {
    path: PathBuf,
}

impl FileTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn retrieve(&self) -> Result<Vec<Task>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(Error::read(err)),
        };

        serde_json::from_str(&content).map_err(Error::read)
    }

    async fn replace(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks).map_err(Error::write)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(Error::write)?;
        }

        tokio::fs::write(&self.path, content)
            .await
            .map_err(Error::write)
    }
}
