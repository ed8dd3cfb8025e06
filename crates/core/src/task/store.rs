//! Task store trait
//!
//! The single capability both sides of the application share: fetch the
//! whole list, or replace it wholesale. The UI selects between the two
//! implementations with a plain success/failure check on the primary.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Whole-list {retrieve, replace} storage interface
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetch the full task list
    async fn retrieve(&self) -> Result<Vec<Task>>;

    /// Replace the full task list
    async fn replace(&self, tasks: &[Task]) -> Result<()>;
}
