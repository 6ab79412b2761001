//! Builder pattern implementations for easy test data construction
//!
//! Provides fluent builders for:
//! - Task construction with sensible defaults
//! - User construction with pre-assigned tasks

use std::rc::Rc;

use assign_core::{Task, TaskRef, User, WorkItem};

/// Builder for constructing Task instances in tests
pub struct TaskBuilder {
    title: String,
    priority: String,
    completed: bool,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            title: "Test Task".to_string(),
            priority: "Medium".to_string(),
            completed: false,
        }
    }

    /// Set task title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set task priority
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Build the task already completed
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Build the final Task
    pub fn build(self) -> Task {
        let task = Task::new(self.title, self.priority);
        if self.completed {
            task.complete();
        }
        task
    }

    /// Build the final Task behind a shared handle
    pub fn build_shared(self) -> TaskRef {
        Rc::new(self.build())
    }
}

/// Builder for constructing User instances in tests
pub struct UserBuilder<T = Task> {
    name: String,
    tasks: Vec<Rc<T>>,
}

impl<T: WorkItem> Default for UserBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WorkItem> UserBuilder<T> {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            name: "Alice".to_string(),
            tasks: Vec::new(),
        }
    }

    /// Set user name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Assign a task when the user is built
    pub fn with_task(mut self, task: &Rc<T>) -> Self {
        self.tasks.push(Rc::clone(task));
        self
    }

    /// Build the final User; tasks are assigned in the order they were added
    pub fn build(self) -> User<T> {
        let mut user = User::new(self.name);
        for task in &self.tasks {
            user.assign_task(task);
        }
        user
    }
}
