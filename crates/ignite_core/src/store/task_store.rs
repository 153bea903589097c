//! Daily task store.
//!
//! # Responsibility
//! - Own the ordered task collection (newest first).
//! - Provide add/toggle/delete operations and the completion ratio.
//!
//! # Invariants
//! - `completion_ratio` is in `[0, 1]` and is 0 for an empty store.
//! - Insertion happens at the front; existing order is otherwise stable.

use crate::model::task::{Task, TaskId, TaskValidationError};
use log::debug;

/// Owned collection of daily tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new task at the front of the collection.
    ///
    /// The task starts incomplete with `Medium` priority; a missing or
    /// blank `time` falls back to `"Anytime"`.
    ///
    /// # Errors
    /// - [`TaskValidationError::BlankTitle`] when `title` trims to empty;
    ///   the collection is unchanged.
    pub fn add_task(
        &mut self,
        title: &str,
        time: Option<&str>,
    ) -> Result<TaskId, TaskValidationError> {
        let task = Task::new(title, time)?;
        let id = task.uuid;
        self.tasks.insert(0, task);
        debug!("event=task_added module=tasks uuid={id} total={}", self.tasks.len());
        Ok(id)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `false` without mutating anything when `id` is absent.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.uuid == id) {
            Some(task) => {
                task.toggle();
                debug!(
                    "event=task_toggled module=tasks uuid={id} is_completed={}",
                    task.is_completed
                );
                true
            }
            None => false,
        }
    }

    /// Removes the task with `id`. Returns `false` when `id` is absent.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.uuid != id);
        let removed = self.tasks.len() < before;
        if removed {
            debug!("event=task_deleted module=tasks uuid={id} total={}", self.tasks.len());
        }
        removed
    }

    /// Completed-over-total ratio in `[0, 1]`; 0 for an empty store.
    pub fn completion_ratio(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64
    }

    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }

    /// Tasks in display order, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
