//! Daily task domain model.
//!
//! # Responsibility
//! - Define the task record tracked by the daily checklist.
//! - Provide the title validation rule shared by all task write paths.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another task.
//! - `title` is non-blank after trimming.
//! - Completion is the only mutable aspect of a task after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Default time label when the caller does not supply one.
pub const DEFAULT_TASK_TIME: &str = "Anytime";

/// Urgency bucket for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Validation failure for task write operations.
///
/// An `Err` guarantees no store state changed; the caller decides whether
/// and how to surface the rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// One entry in the daily task checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID.
    pub uuid: TaskId,
    /// Non-blank display title.
    pub title: String,
    /// Free-form time label, e.g. `"06:00 AM"` or `"Anytime"`.
    pub time: String,
    /// Completion flag, flipped by toggle operations only.
    pub is_completed: bool,
    /// Urgency bucket; defaults to `Medium` for user-entered tasks.
    pub priority: Priority,
}

impl Task {
    /// Creates a task with a generated stable ID.
    ///
    /// # Errors
    /// - [`TaskValidationError::BlankTitle`] when `title` trims to empty.
    pub fn new(title: &str, time: Option<&str>) -> Result<Self, TaskValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        let time = match time.map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => DEFAULT_TASK_TIME,
        };
        Ok(Self {
            uuid: Uuid::new_v4(),
            title: title.to_string(),
            time: time.to_string(),
            is_completed: false,
            priority: Priority::Medium,
        })
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
