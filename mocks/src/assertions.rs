//! Custom assertion helpers for testing
//!
//! Provides specialized assertions for:
//! - Assignment membership by handle identity
//! - Completion state
//! - Assignment order

use std::rc::Rc;

use assign_core::{User, WorkItem};

/// Assert the exact task handle appears exactly once in the user's tasks
pub fn assert_assigned_once<T: WorkItem>(user: &User<T>, task: &Rc<T>) {
    let count = user.tasks().iter().filter(|t| Rc::ptr_eq(t, task)).count();
    assert_eq!(
        count,
        1,
        "Expected task '{}' to be assigned to {} exactly once, found {} times",
        task.title(),
        user.name(),
        count
    );
}

/// Assert the task handle is not in the user's tasks
pub fn assert_not_assigned<T: WorkItem>(user: &User<T>, task: &Rc<T>) {
    assert!(
        !user.tasks().iter().any(|t| Rc::ptr_eq(t, task)),
        "Expected task '{}' not to be assigned to {}",
        task.title(),
        user.name()
    );
}

/// Assert the user's tasks carry these titles, in assignment order
pub fn assert_task_titles<T: WorkItem>(user: &User<T>, expected: &[&str]) {
    let actual: Vec<&str> = user.tasks().iter().map(|t| t.title()).collect();
    assert_eq!(
        actual, expected,
        "Tasks assigned to {} are not in the expected order",
        user.name()
    );
}

/// Assert no two entries in the user's tasks share a handle
pub fn assert_no_duplicate_handles<T: WorkItem>(user: &User<T>) {
    let tasks = user.tasks();
    for (i, task) in tasks.iter().enumerate() {
        assert!(
            !tasks[i + 1..].iter().any(|t| Rc::ptr_eq(t, task)),
            "Task '{}' is assigned to {} more than once",
            task.title(),
            user.name()
        );
    }
}

/// Assert every task assigned to the user is still pending
pub fn assert_all_pending<T: WorkItem>(user: &User<T>) {
    let completed: Vec<&str> = user.completed_tasks().map(|t| t.title()).collect();
    assert!(
        completed.is_empty(),
        "Expected all tasks of {} to be pending, completed: {:?}",
        user.name(),
        completed
    );
}
