//! Pure operations over an in-memory task collection.
//!
//! None of these touch the filesystem; the command shell loads the
//! collection, applies one operation, and saves the result.

use chrono::Utc;

use crate::error::{Result, TrackerError};
use crate::models::{Status, Task};

/// Status filter for listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Todo,
    InProgress,
    Done,
}

impl StatusFilter {
    fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Todo => status == Status::Todo,
            StatusFilter::InProgress => status == Status::InProgress,
            StatusFilter::Done => status == Status::Done,
        }
    }
}

/// Appends a new task with the given description.
///
/// The id is one greater than the maximum id present, or 1 for an empty
/// collection. Ids deleted from the middle of the collection are never
/// handed out again.
pub fn create(tasks: &mut Vec<Task>, description: &str) -> Result<Task> {
    let description = validate_description(description)?;
    let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    let task = Task {
        id,
        description,
        status: Status::Todo,
        created_at: Utc::now(),
        updated_at: None,
    };
    tasks.push(task.clone());
    Ok(task)
}

/// Finds the position of the task with the given id.
pub fn find_index(tasks: &[Task], id: u64) -> Result<usize> {
    tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or(TrackerError::NotFound(id))
}

/// Replaces the description of the task with the given id and stamps
/// `updated_at`.
pub fn update_description(tasks: &mut [Task], id: u64, description: &str) -> Result<()> {
    let description = validate_description(description)?;
    let idx = find_index(tasks, id)?;
    tasks[idx].description = description;
    tasks[idx].updated_at = Some(Utc::now());
    Ok(())
}

/// Sets the status of the task with the given id and stamps `updated_at`.
///
/// Setting the status a task already has is allowed and still stamps the
/// timestamp; it records that the task was touched.
pub fn set_status(tasks: &mut [Task], id: u64, status: Status) -> Result<()> {
    let idx = find_index(tasks, id)?;
    tasks[idx].status = status;
    tasks[idx].updated_at = Some(Utc::now());
    Ok(())
}

/// Removes the task with the given id, preserving the order of the rest.
pub fn remove(tasks: &mut Vec<Task>, id: u64) -> Result<Task> {
    let idx = find_index(tasks, id)?;
    Ok(tasks.remove(idx))
}

/// Returns the tasks matching the filter, in collection order.
pub fn filter<'a>(tasks: &'a [Task], status: StatusFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| status.matches(t.status)).collect()
}

fn validate_description(description: &str) -> Result<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation(
            "description must not be empty".into(),
        ));
    }
    Ok(trimmed.to_string())
}
