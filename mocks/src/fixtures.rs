//! Standard test fixtures for consistent testing
//!
//! Provides pre-built test data including:
//! - The reference user and task
//! - Tasks in each lifecycle state
//! - Bulk task generators

use std::rc::Rc;

use assign_core::{Task, TaskRef, User};

use crate::MockTask;

/// Name of the reference user
pub const TEST_USER_NAME: &str = "Alice";

/// Title of the reference task
pub const TEST_TASK_TITLE: &str = "Complete project";

/// Priority of the reference task
pub const TEST_TASK_PRIORITY: &str = "High";

/// Priorities cycled through by the bulk fixtures
pub const TEST_PRIORITIES: [&str; 3] = ["High", "Medium", "Low"];

/// Create the reference user with no tasks
pub fn create_test_user() -> User {
    User::new(TEST_USER_NAME)
}

/// Create the reference task ("Complete project", "High")
pub fn create_test_task() -> TaskRef {
    Task::shared(TEST_TASK_TITLE, TEST_TASK_PRIORITY)
}

/// Create the reference task already completed
pub fn create_completed_task() -> TaskRef {
    let task = create_test_task();
    task.complete();
    task
}

/// Create multiple distinct pending tasks
pub fn create_test_tasks(count: usize) -> Vec<TaskRef> {
    (1..=count)
        .map(|i| {
            Task::shared(
                format!("Test Task {i}"),
                TEST_PRIORITIES[(i - 1) % TEST_PRIORITIES.len()],
            )
        })
        .collect()
}

/// Create the reference user with `count` tasks assigned
pub fn create_user_with_tasks(count: usize) -> (User, Vec<TaskRef>) {
    let tasks = create_test_tasks(count);
    let mut user = create_test_user();
    for task in &tasks {
        user.assign_task(task);
    }
    (user, tasks)
}

/// Create a user and a pending mock task, matching the reference setup
pub fn create_mock_setup() -> (User<MockTask>, Rc<MockTask>) {
    (
        User::new(TEST_USER_NAME),
        MockTask::shared(TEST_TASK_TITLE, TEST_TASK_PRIORITY),
    )
}
