use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item as stored in the `todos` table and exchanged over the API.
///
/// Only `completed` ever changes after creation. `id` and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Returns `true` when the text has something other than whitespace in it.
pub fn is_valid_text(text: &str) -> bool {
    !text.trim().is_empty()
}
