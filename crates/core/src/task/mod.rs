//! Task module
//!
//! This module contains the task model and storage implementations.

mod document;
mod file_store;
mod model;
mod remote_store;
mod store;

pub use document::ListDocument;
pub use file_store::FileTaskStore;
pub use model::Task;
pub use remote_store::RemoteTaskStore;
pub use store::TaskStore;
