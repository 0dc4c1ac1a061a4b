use thiserror::Error;

/// Errors surfaced by the storage layer and the task operations.
///
/// None of these are recovered internally; they propagate to the command
/// shell, which prints them and sets the exit status.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The storage file could not be opened, read, or written.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The storage file contents are not a valid JSON array of tasks.
    #[error("storage file is not a valid task list: {0}")]
    Format(#[from] serde_json::Error),

    /// Caller-supplied input violated a precondition.
    #[error("{0}")]
    Validation(String),

    /// The referenced task id does not exist in the collection.
    #[error("task {0} not found")]
    NotFound(u64),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
