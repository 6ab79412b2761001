use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    error::{AssignmentError, Result},
    models::{Task, WorkItem},
};

/// An actor holding an ordered, append-only collection of assigned tasks.
///
/// The user keeps a shared handle to every task assigned to it. Lookups are
/// by handle identity (`Rc::ptr_eq`), so two tasks with identical contents
/// are tracked separately, and the same task may be assigned to several
/// users at once.
///
/// # Examples
///
/// ```rust
/// use assign_core::{Task, User};
///
/// let mut user = User::new("Alice");
/// let task = Task::shared("Complete project", "High");
///
/// assert!(user.assign_task(&task));
/// assert!(!user.assign_task(&task));
///
/// assert!(user.complete_task(&task));
/// assert!(!user.complete_task(&task));
/// assert!(task.is_completed());
/// ```
#[derive(Debug, Serialize)]
pub struct User<T = Task> {
    /// Display name
    name: String,
    /// Assigned tasks in assignment order
    tasks: Vec<Rc<T>>,
}

impl<T: WorkItem> User<T> {
    /// Create a user with no assigned tasks
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned tasks in the order they were assigned
    pub fn tasks(&self) -> &[Rc<T>] {
        &self.tasks
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether this exact task handle has been assigned to the user
    pub fn is_assigned(&self, task: &Rc<T>) -> bool {
        self.find(task).is_some()
    }

    /// Assign a task, reporting why it was rejected.
    ///
    /// # Returns
    /// * `Ok(())` - The task was appended to the collection
    /// * `Err(AssignmentError::AlreadyAssigned)` - The same handle is already present; nothing changed
    pub fn try_assign_task(&mut self, task: &Rc<T>) -> Result<()> {
        if self.is_assigned(task) {
            trace!(user = %self.name, task = %task.title(), "Task already assigned");
            return Err(AssignmentError::already_assigned(&self.name, task.title()));
        }

        self.tasks.push(Rc::clone(task));
        debug!(
            user = %self.name,
            task = %task.title(),
            priority = %task.priority(),
            assigned = self.tasks.len(),
            "Task assigned"
        );
        Ok(())
    }

    /// Assign a task. Returns `false` if this handle is already assigned.
    pub fn assign_task(&mut self, task: &Rc<T>) -> bool {
        self.try_assign_task(task).is_ok()
    }

    /// Complete an assigned task, reporting why it was rejected.
    ///
    /// `complete()` is invoked on the task only when the call succeeds.
    ///
    /// # Returns
    /// * `Ok(())` - The task was pending and is now completed
    /// * `Err(AssignmentError::NotAssigned)` - The handle was never assigned to this user
    /// * `Err(AssignmentError::AlreadyCompleted)` - The task was already completed
    pub fn try_complete_task(&self, task: &Rc<T>) -> Result<()> {
        let Some(assigned) = self.find(task) else {
            trace!(user = %self.name, task = %task.title(), "Task not assigned");
            return Err(AssignmentError::not_assigned(&self.name, task.title()));
        };

        if assigned.is_completed() {
            trace!(user = %self.name, task = %assigned.title(), "Task already completed");
            return Err(AssignmentError::already_completed(
                &self.name,
                assigned.title(),
            ));
        }

        assigned.complete();
        debug!(user = %self.name, task = %assigned.title(), "Task completed");
        Ok(())
    }

    /// Complete an assigned task. Returns `false` if the task is not assigned
    /// to this user or is already completed.
    pub fn complete_task(&self, task: &Rc<T>) -> bool {
        self.try_complete_task(task).is_ok()
    }

    /// Assigned tasks that are not completed yet, in assignment order
    pub fn pending_tasks(&self) -> impl Iterator<Item = &Rc<T>> + '_ {
        self.tasks.iter().filter(|t| !t.is_completed())
    }

    /// Assigned tasks that are completed, in assignment order
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Rc<T>> + '_ {
        self.tasks.iter().filter(|t| t.is_completed())
    }

    fn find(&self, task: &Rc<T>) -> Option<&Rc<T>> {
        self.tasks.iter().find(|t| Rc::ptr_eq(t, task))
    }
}
