use thiserror::Error;

/// Result type alias for assignment operations
pub type Result<T> = std::result::Result<T, AssignmentError>;

/// Reasons an assignment or completion request was a no-op.
///
/// The boolean operations on [`User`](crate::user::User) collapse these into
/// `false`; the `try_*` variants surface them so callers can tell the cases
/// apart.
///
/// # Examples
///
/// ```rust
/// use assign_core::{AssignmentError, Task, User};
///
/// let user = User::new("Alice");
/// let task = Task::shared("Complete project", "High");
///
/// let err = user.try_complete_task(&task).unwrap_err();
/// assert!(err.is_not_assigned());
/// assert_eq!(
///     err,
///     AssignmentError::not_assigned("Alice", "Complete project")
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// The task handle is already in the user's collection
    #[error("Task '{task}' is already assigned to {user}")]
    AlreadyAssigned { user: String, task: String },

    /// The task handle was never assigned to the user
    #[error("Task '{task}' is not assigned to {user}")]
    NotAssigned { user: String, task: String },

    /// The task was assigned but has already been completed
    #[error("Task '{task}' assigned to {user} is already completed")]
    AlreadyCompleted { user: String, task: String },
}

impl AssignmentError {
    /// Create an already-assigned error
    pub fn already_assigned(user: impl Into<String>, task: impl Into<String>) -> Self {
        Self::AlreadyAssigned {
            user: user.into(),
            task: task.into(),
        }
    }

    /// Create a not-assigned error
    pub fn not_assigned(user: impl Into<String>, task: impl Into<String>) -> Self {
        Self::NotAssigned {
            user: user.into(),
            task: task.into(),
        }
    }

    /// Create an already-completed error
    pub fn already_completed(user: impl Into<String>, task: impl Into<String>) -> Self {
        Self::AlreadyCompleted {
            user: user.into(),
            task: task.into(),
        }
    }

    pub fn is_already_assigned(&self) -> bool {
        matches!(self, AssignmentError::AlreadyAssigned { .. })
    }

    pub fn is_not_assigned(&self) -> bool {
        matches!(self, AssignmentError::NotAssigned { .. })
    }

    pub fn is_already_completed(&self) -> bool {
        matches!(self, AssignmentError::AlreadyCompleted { .. })
    }

    /// Title of the task the rejected request referred to
    pub fn task_title(&self) -> &str {
        match self {
            AssignmentError::AlreadyAssigned { task, .. }
            | AssignmentError::NotAssigned { task, .. }
            | AssignmentError::AlreadyCompleted { task, .. } => task,
        }
    }
}
