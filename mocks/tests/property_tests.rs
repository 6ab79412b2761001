//! Property-based tests for assignment invariants

use std::rc::Rc;

use assign_core::{Task, TaskRef, User};
use mocks::*;
use proptest::prelude::*;

const POOL_SIZE: usize = 5;

fn pool() -> Vec<TaskRef> {
    (0..POOL_SIZE)
        .map(|i| Task::shared(format!("pool-{i}"), "Medium"))
        .collect()
}

proptest! {
    #[test]
    fn prop_fresh_task_is_pending((title, priority) in task_spec_strategy()) {
        let task = Task::new(title.clone(), priority.clone());
        prop_assert!(!task.is_completed());
        prop_assert_eq!(task.title(), title.as_str());
        prop_assert_eq!(task.priority(), priority.as_str());
    }

    #[test]
    fn prop_complete_is_monotonic(
        (title, priority) in task_spec_strategy(),
        extra_calls in 0usize..5,
    ) {
        let task = Task::new(title, priority);
        task.complete();
        for _ in 0..extra_calls {
            task.complete();
            prop_assert!(task.is_completed());
        }
        prop_assert!(task.is_completed());
    }

    #[test]
    fn prop_same_contents_never_collide(spec in task_spec_strategy(), copies in 1usize..6) {
        let mut user: User = User::new("prop-user");
        let tasks: Vec<TaskRef> = (0..copies)
            .map(|_| Task::shared(spec.0.clone(), spec.1.clone()))
            .collect();

        for task in &tasks {
            prop_assert!(user.assign_task(task));
        }
        prop_assert_eq!(user.task_count(), copies);
    }

    #[test]
    fn prop_assignment_session_invariants(ops in assignment_ops_strategy(POOL_SIZE, 40)) {
        let tasks = pool();
        let mut user = User::new("prop-user");
        let mut expected_order: Vec<usize> = Vec::new();
        let mut completed = [false; POOL_SIZE];

        for op in ops {
            match op {
                AssignmentOp::Assign(i) => {
                    let fresh = !expected_order.contains(&i);
                    prop_assert_eq!(user.assign_task(&tasks[i]), fresh);
                    if fresh {
                        expected_order.push(i);
                    }
                }
                AssignmentOp::Complete(i) => {
                    let allowed = expected_order.contains(&i) && !completed[i];
                    prop_assert_eq!(user.complete_task(&tasks[i]), allowed);
                    if allowed {
                        completed[i] = true;
                    }
                }
            }
        }

        prop_assert_eq!(user.task_count(), expected_order.len());
        for (slot, &i) in expected_order.iter().enumerate() {
            prop_assert!(Rc::ptr_eq(&user.tasks()[slot], &tasks[i]));
        }
        for (i, task) in tasks.iter().enumerate() {
            prop_assert_eq!(task.is_completed(), completed[i]);
        }
        assert_no_duplicate_handles(&user);
    }
}
