//! tsk command implementations.

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, format_task_line, OutputOptions};
use crate::store::TaskStore;
use crate::task::{Priority, Task};

pub fn add(
    store: &mut TaskStore,
    description: &str,
    priority: Priority,
    options: OutputOptions,
) -> Result<()> {
    let task = store.add(description, priority)?;

    let human = vec![format!(
        "Added task {}: {} ({})",
        task.id,
        task.description,
        task.priority.as_str()
    )];
    emit_success(options, "add", &task, &human)
}

pub fn list(store: &TaskStore, show_all: bool, options: OutputOptions) -> Result<()> {
    let shown: Vec<&Task> = if show_all {
        store.tasks().iter().collect()
    } else {
        store.pending().collect()
    };

    // An empty store and "everything is done" read differently.
    let human = if store.is_empty() {
        vec!["No tasks found.".to_string()]
    } else if shown.is_empty() {
        vec!["No pending tasks.".to_string()]
    } else {
        shown.iter().map(|task| format_task_line(task)).collect()
    };

    emit_success(options, "list", &shown, &human)
}

pub fn complete(store: &mut TaskStore, id: u64, options: OutputOptions) -> Result<()> {
    let found = store.complete(id)?;

    let human = if found {
        vec![format!("Completed task {id}")]
    } else {
        vec![format!("No task with id {id}")]
    };
    emit_success(options, "complete", &MatchReport { id, found }, &human)
}

pub fn delete(store: &mut TaskStore, id: u64, options: OutputOptions) -> Result<()> {
    let found = store.delete(id)?;

    let human = if found {
        vec![format!("Deleted task {id}")]
    } else {
        vec![format!("No task with id {id}")]
    };
    emit_success(options, "delete", &MatchReport { id, found }, &human)
}

pub fn clear(store: &mut TaskStore, options: OutputOptions) -> Result<()> {
    let removed = store.clear_completed()?;

    let noun = if removed == 1 { "task" } else { "tasks" };
    let human = vec![format!("Cleared {removed} completed {noun}")];
    emit_success(options, "clear", &ClearReport { removed }, &human)
}

/// JSON payload for complete/delete: unknown ids are a no-op, not an error.
#[derive(Serialize)]
struct MatchReport {
    id: u64,
    found: bool,
}

#[derive(Serialize)]
struct ClearReport {
    removed: usize,
}
