//! Task records for tsk.
//!
//! A task is a single tracked item: free-form description, a priority,
//! and a one-way completion state. The on-disk field for the description
//! is `task`, kept for compatibility with existing store files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority of a task. Wire values are lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Colored marker used in list output
    pub fn marker(&self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// One tracked item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Positive id, unique at creation time (count-based, see `TaskStore::add`)
    pub id: u64,
    /// Description, immutable after creation
    #[serde(rename = "task")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub completed: bool,
    /// Timestamp captured at creation, immutable
    pub created_at: DateTime<Utc>,
    /// Present only once the task has been completed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: u64, description: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            description: description.into(),
            priority,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Transition to completed. One-way: there is no uncomplete.
    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
    }

    /// Status glyph used in list output
    pub fn status_glyph(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}
