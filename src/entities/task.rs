//! Kanban task entity.
//!
//! The assignee is stored as initials, matching the avatar of a team member,
//! not as a foreign key.

use serde::{Deserialize, Serialize};

/// Board column of a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Finished
    Done,
}

impl TaskStatus {
    /// Board columns in display order.
    pub const COLUMNS: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Wire name (`todo`, `in-progress`, `done`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

/// Task priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Urgent
    High,
    /// Normal
    Medium,
    /// Can wait
    Low,
}

impl TaskPriority {
    /// Wire name and badge text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Task card on the kanban board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanTask {
    /// Unique identifier
    pub id: u32,
    /// Short description
    pub title: String,
    /// Column
    pub status: TaskStatus,
    /// Priority
    pub priority: TaskPriority,
    /// Assignee initials
    pub assignee: String,
}
