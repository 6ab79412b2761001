//! Contract test helpers for validating trait implementations
//!
//! Provides standardized checks that any `WorkItem` implementation, and a
//! `User` driving it, should pass.

use std::rc::Rc;

use assign_core::{User, WorkItem};

use crate::{assert_assigned_once, assert_not_assigned};

/// Run the full contract suite against a WorkItem implementation
///
/// `make` must return a fresh, pending item with the given title on every call.
pub fn test_work_item_contract<T, F>(make: F)
where
    T: WorkItem,
    F: Fn(&str) -> Rc<T>,
{
    test_completion_contract(&*make("completion"));
    test_assign_contract(&make);
    test_complete_contract(&make);
    test_independence_contract(&make);
}

/// Test the completion flag: pending at first, then monotonic and idempotent
pub fn test_completion_contract<T: WorkItem>(item: &T) {
    assert!(!item.is_completed(), "Fresh item should be pending");

    item.complete();
    assert!(item.is_completed(), "Item should be completed after complete()");

    item.complete();
    assert!(
        item.is_completed(),
        "Item should stay completed after a second complete()"
    );
}

/// Test assignment rules: first assignment succeeds, duplicates are rejected
pub fn test_assign_contract<T, F>(make: &F)
where
    T: WorkItem,
    F: Fn(&str) -> Rc<T>,
{
    let mut user = User::new("contract-user");
    let task = make("assign");

    assert!(user.assign_task(&task), "First assignment should succeed");
    assert_assigned_once(&user, &task);

    assert!(!user.assign_task(&task), "Second assignment should be rejected");
    assert_assigned_once(&user, &task);
    assert_eq!(user.task_count(), 1);
}

/// Test completion rules through a user
pub fn test_complete_contract<T, F>(make: &F)
where
    T: WorkItem,
    F: Fn(&str) -> Rc<T>,
{
    let mut user = User::new("contract-user");
    let task = make("complete");

    assert!(
        !user.complete_task(&task),
        "Completing an unassigned task should be rejected"
    );
    assert!(
        !task.is_completed(),
        "Rejected completion must not change the task"
    );
    assert_not_assigned(&user, &task);

    user.assign_task(&task);
    assert!(
        user.complete_task(&task),
        "Completing an assigned pending task should succeed"
    );
    assert!(task.is_completed());

    assert!(
        !user.complete_task(&task),
        "Completing an already completed task should be rejected"
    );
}

/// Test that completing one task leaves other assigned tasks untouched
pub fn test_independence_contract<T, F>(make: &F)
where
    T: WorkItem,
    F: Fn(&str) -> Rc<T>,
{
    let mut user = User::new("contract-user");
    let first = make("first");
    let second = make("second");

    user.assign_task(&first);
    user.assign_task(&second);
    user.complete_task(&first);

    assert!(first.is_completed());
    assert!(
        !second.is_completed(),
        "Completing one task must not complete another"
    );
}
