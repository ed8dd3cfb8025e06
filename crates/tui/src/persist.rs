//! Load/save plumbing between the UI and the two stores
//!
//! The remote store is always tried first; the local cache file only ever
//! absorbs failures. Saves are fire-and-forget: no retry, no queueing, no
//! sequencing of overlapping saves, and the user is never notified.

use std::sync::Arc;

use todo_core::task::{Task, TaskStore};

/// Fetch the list from `primary`, falling back to `fallback`
///
/// When both fail the list starts empty.
pub async fn load(primary: &dyn TaskStore, fallback: &dyn TaskStore) -> Vec<Task> {
    match primary.retrieve().await {
        Ok(tasks) => tasks,
        Err(err) => {
            tracing::debug!("primary load failed, using local cache: {}", err);
            fallback.retrieve().await.unwrap_or_default()
        }
    }
}

/// Push `tasks` to `primary`, caching to `fallback` on failure
pub async fn save(primary: &dyn TaskStore, fallback: &dyn TaskStore, tasks: &[Task]) {
    if let Err(err) = primary.replace(tasks).await {
        tracing::debug!("primary save failed, caching locally: {}", err);
        // A double failure is swallowed; the in-memory list stays authoritative.
        let _ = fallback.replace(tasks).await;
    }
}

/// Fire-and-forget save of a list snapshot
pub fn spawn_save(
    primary: Arc<dyn TaskStore>,
    fallback: Arc<dyn TaskStore>,
    snapshot: Vec<Task>,
) {
    tokio::spawn(async move {
        save(primary.as_ref(), fallback.as_ref(), &snapshot).await;
    });
}
