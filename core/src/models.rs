use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contract a task exposes to the [`User`](crate::user::User) it is assigned to.
///
/// [`Task`] is the production implementation. Test doubles (see the `mocks`
/// crate) implement it to observe how a user drives completion.
///
/// Completion goes through `&self` because a task is reached through shared
/// `Rc` handles held by the caller and by every user it is assigned to.
pub trait WorkItem {
    /// Descriptive label
    fn title(&self) -> &str;

    /// Free-form priority classification (e.g. "High")
    fn priority(&self) -> &str;

    /// Whether the task has been completed
    fn is_completed(&self) -> bool;

    /// Mark the task completed. Must be idempotent.
    fn complete(&self);
}

/// A unit of work with a title, a priority and a one-way completion flag.
///
/// Tasks have no notion of value equality: two tasks with the same title and
/// priority are different tasks. Identity is the `Rc` handle returned by
/// [`Task::shared`].
///
/// # Examples
///
/// ```rust
/// use assign_core::{Task, TaskStatus};
///
/// let task = Task::new("Complete project", "High");
/// assert!(!task.is_completed());
/// assert_eq!(task.status(), TaskStatus::Pending);
///
/// task.complete();
/// task.complete();
/// assert!(task.is_completed());
/// assert!(task.completed_at().is_some());
/// ```
#[derive(Debug, Serialize)]
pub struct Task {
    /// Brief task title
    title: String,
    /// Priority label, not interpreted
    priority: String,
    /// Completion flag, false until `complete()` is called
    completed: Cell<bool>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Set by the first effective `complete()`
    completed_at: Cell<Option<DateTime<Utc>>>,
}

/// Shared handle to a [`Task`]
pub type TaskRef = Rc<Task>;

/// Lifecycle of a task: `Pending` → `Completed`, never back.
#[derive(Debug, Clone, Copy, Hash, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    /// Not yet completed
    Pending,
    /// Completed; terminal
    Completed,
}

impl Task {
    /// Create a pending task
    pub fn new(title: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: priority.into(),
            completed: Cell::new(false),
            created_at: Utc::now(),
            completed_at: Cell::new(None),
        }
    }

    /// Create a pending task behind a shared handle, ready to be assigned
    pub fn shared(title: impl Into<String>, priority: impl Into<String>) -> TaskRef {
        Rc::new(Self::new(title, priority))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    /// Mark the task completed.
    ///
    /// Calling this on a completed task leaves it completed and keeps the
    /// original completion timestamp.
    pub fn complete(&self) {
        if self.completed.replace(true) {
            return;
        }
        self.completed_at.set(Some(Utc::now()));
        tracing::trace!(title = %self.title, "Task marked completed");
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at.get()
    }

    /// Current lifecycle state
    pub fn status(&self) -> TaskStatus {
        if self.is_completed() {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }
}

impl WorkItem for Task {
    fn title(&self) -> &str {
        Task::title(self)
    }

    fn priority(&self) -> &str {
        Task::priority(self)
    }

    fn is_completed(&self) -> bool {
        Task::is_completed(self)
    }

    fn complete(&self) {
        Task::complete(self)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::Completed => write!(f, "Completed"),
        }
    }
}
