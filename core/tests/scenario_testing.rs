//! End-to-end assignment scenarios exercised through the public API only.

use std::rc::Rc;

use assign_core::{AssignmentError, Task, TaskStatus, User};

#[test]
fn test_scenario_reference_flow() {
    println!("\n🧪 TESTING: Alice completes her project");
    let mut user = User::new("Alice");
    let task = Task::shared("Complete project", "High");

    assert!(user.assign_task(&task), "First assignment should succeed");
    assert!(user.complete_task(&task), "Assigned pending task should complete");
    assert!(task.is_completed());
    assert_eq!(task.status(), TaskStatus::Completed);

    println!("✅ Reference flow passed");
}

#[test]
fn test_scenario_two_tasks_are_independent() {
    println!("\n🧪 TESTING: Two tasks completed independently");
    let mut user = User::new("Alice");
    let task = Task::shared("Complete project", "High");
    let another_task = Task::shared("Write report", "Low");

    assert!(user.assign_task(&task));
    assert!(user.assign_task(&another_task));
    assert_eq!(user.task_count(), 2);

    assert!(user.complete_task(&task));

    assert!(task.is_completed());
    assert!(!another_task.is_completed(), "Completing one task must not touch the other");
    assert_eq!(user.pending_tasks().count(), 1);
    assert_eq!(user.completed_tasks().count(), 1);

    println!("✅ Independence scenario passed");
}

#[test]
fn test_scenario_rejected_requests_leave_state_unchanged() {
    println!("\n🧪 TESTING: Rejected requests are no-ops");
    let mut user = User::new("Alice");
    let assigned = Task::shared("Assigned", "High");
    let stranger = Task::shared("Stranger", "High");
    user.assign_task(&assigned);

    // Completing a task that was never assigned
    assert_eq!(
        user.try_complete_task(&stranger),
        Err(AssignmentError::not_assigned("Alice", "Stranger"))
    );
    assert!(!stranger.is_completed());
    assert_eq!(user.task_count(), 1);

    // Assigning twice
    assert_eq!(
        user.try_assign_task(&assigned),
        Err(AssignmentError::already_assigned("Alice", "Assigned"))
    );
    assert_eq!(user.task_count(), 1);

    // Completing twice
    assert_eq!(user.try_complete_task(&assigned), Ok(()));
    assert_eq!(
        user.try_complete_task(&assigned),
        Err(AssignmentError::already_completed("Alice", "Assigned"))
    );
    assert!(assigned.is_completed());

    println!("✅ Rejection scenario passed");
}

#[test]
fn test_scenario_task_shared_between_users() {
    println!("\n🧪 TESTING: One task shared by two users");
    let mut alice = User::new("Alice");
    let mut bob = User::new("Bob");
    let task = Task::shared("Pair on migration", "Medium");

    // Cross-user assignment is allowed
    assert!(alice.assign_task(&task));
    assert!(bob.assign_task(&task));
    assert!(Rc::ptr_eq(&alice.tasks()[0], &bob.tasks()[0]));

    assert!(bob.complete_task(&task));

    // Completion is visible through every handle
    assert!(alice.tasks()[0].is_completed());
    assert!(!alice.complete_task(&task));
    assert!(alice.try_complete_task(&task).unwrap_err().is_already_completed());

    println!("✅ Sharing scenario passed");
}

#[test]
fn test_scenario_user_keeps_task_alive() {
    println!("\n🧪 TESTING: User handle outlives the caller's");
    let mut user = User::new("Alice");
    {
        let task = Task::shared("Scoped", "Low");
        user.assign_task(&task);
        assert_eq!(Rc::strong_count(&task), 2);
    }

    assert_eq!(user.task_count(), 1);
    assert_eq!(Rc::strong_count(&user.tasks()[0]), 1);
    assert_eq!(user.tasks()[0].title(), "Scoped");

    println!("✅ Lifetime scenario passed");
}
