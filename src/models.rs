use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single task in the tracker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier for the task. Never reused within a collection.
    pub id: u64,
    /// The description of the task.
    pub description: String,
    /// Current lifecycle status.
    pub status: Status,
    /// Timestamp when the task was created (RFC 3339). Immutable after creation.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation. `None` until the task is first
    /// updated or marked.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lifecycle status of a task.
///
/// The variant names double as the on-disk literals, so they must stay stable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Todo => "Todo",
            Status::InProgress => "InProgress",
            Status::Done => "Done",
        };
        f.write_str(s)
    }
}
