use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::error::Result;
use crate::models::{Status, Task};
use crate::ops;
use crate::ops::StatusFilter;
use crate::storage::Store;

/// Adds a new task to the database and prints the assigned id.
pub fn cmd_add(store: &Store, description: &str) -> Result<()> {
    let mut tasks = store.load()?;
    let task = ops::create(&mut tasks, description)?;
    store.save(&tasks)?;
    println!("Task added (id = {})", task.id);
    Ok(())
}

/// Rewrites the description of an existing task.
pub fn cmd_update(store: &Store, id: u64, description: &str) -> Result<()> {
    let mut tasks = store.load()?;
    ops::update_description(&mut tasks, id, description)?;
    store.save(&tasks)?;
    println!("Task {} updated.", id);
    Ok(())
}

/// Sets the status of an existing task.
pub fn cmd_mark(store: &Store, id: u64, status: Status) -> Result<()> {
    let mut tasks = store.load()?;
    ops::set_status(&mut tasks, id, status)?;
    store.save(&tasks)?;
    println!("Task {} marked as {}.", id, status);
    Ok(())
}

/// Removes a task from the database by id.
pub fn cmd_delete(store: &Store, id: u64) -> Result<()> {
    let mut tasks = store.load()?;
    ops::remove(&mut tasks, id)?;
    store.save(&tasks)?;
    println!("Task {} removed.", id);
    Ok(())
}

/// Lists tasks in a formatted table, optionally filtered by status.
pub fn cmd_list(store: &Store, filter: StatusFilter) -> Result<()> {
    let tasks = store.load()?;
    let visible = ops::filter(&tasks, filter);
    if visible.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }
    println!("{}", render_table(&visible));
    Ok(())
}

fn render_table(tasks: &[&Task]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Created").add_attribute(Attribute::Bold),
            Cell::new("Updated").add_attribute(Attribute::Bold),
        ]);

    for t in tasks {
        let status_color = match t.status {
            Status::Todo => Color::Yellow,
            Status::InProgress => Color::Blue,
            Status::Done => Color::Green,
        };
        table.add_row(vec![
            Cell::new(t.id),
            Cell::new(&t.description),
            Cell::new(t.status).fg(status_color),
            Cell::new(format_time(&t.created_at)),
            Cell::new(t.updated_at.as_ref().map(format_time).unwrap_or_default()),
        ]);
    }
    table
}

fn format_time(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
