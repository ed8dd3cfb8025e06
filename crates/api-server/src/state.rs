//! Application state

use std::path::Path;
use std::sync::Arc;

use todo_core::task::ListDocument;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    document: ListDocument,
}

impl AppState {
    /// Create a new AppState over the backing document at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                document: ListDocument::new(path.as_ref()),
            }),
        }
    }

    /// Get a reference to the backing document
    pub fn document(&self) -> &ListDocument {
        &self.inner.document
    }
}
