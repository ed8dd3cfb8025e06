//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item
///
/// Ids are millisecond timestamps rendered as strings, assigned at
/// creation and never reused. `created_at` is set once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new incomplete task with the given text
    pub fn new(text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            text: text.into(),
            completed: false,
            created_at: now,
        }
    }
}
